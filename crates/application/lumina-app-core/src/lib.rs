pub mod app_core;
pub mod assistant;
mod async_runtime;
pub mod chat;
pub mod domain;
pub mod kernel;
pub mod observe;
pub mod ports;
pub mod router;
pub mod viewmodel;

pub use app_core::*;
pub use assistant::LiveAssistant;
pub use chat::{ChatMessage, ChatRole, ChatSession};
pub use domain::{route_table, CartLine, CartState, Page};
pub use kernel::{AppCommand, StoreApp};
pub use observe::{Observable, Subscription};
pub use ports::AssistantPort;
pub use router::{Location, Navigator, Params, Resolved, RoutePattern, RouteTable};
pub use viewmodel::*;
