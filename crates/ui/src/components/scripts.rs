/// Reports the window width over the eval channel: the current value
/// immediately, then on every resize. Classification happens on the Rust
/// side so the breakpoint lives in one place.
#[must_use]
pub fn viewport_watch_script() -> String {
    r"(function() {
                    dioxus.send(window.innerWidth);
                    window.addEventListener('resize', () => {
                        dioxus.send(window.innerWidth);
                    });
                })();"
        .to_string()
}
