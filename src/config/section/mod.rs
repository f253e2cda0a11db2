//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module      | TOML Section    | Purpose                          |
//! |-------------|-----------------|----------------------------------|
//! | `edit_link` | `[edit_link]`   | "Edit this page" link base URL   |
//! | `sidebar`   | `[[sidebar]]`   | Ordered navigation groups        |
//! | `social`    | `[social]`      | Social links                     |

mod edit_link;
mod sidebar;
mod social;

pub use edit_link::EditLinkConfig;
pub use sidebar::{AutogenerateConfig, SidebarEntry, SidebarGroup, SidebarGroupConfig};
pub use social::SocialConfig;
