#![forbid(unsafe_code)]

pub mod completion_flow;
pub mod model;
pub mod resolver;
pub mod router;
pub mod sidebar;

pub use completion_flow::{CompletionFlow, CompletionPhase};
pub use resolver::{ContentDescriptor, resolve};
pub use router::SessionRouter;
pub use sidebar::{MOBILE_BREAKPOINT_PX, SidebarState, ViewportClass, classify_width};
