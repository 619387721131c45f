//! Page components.

mod confirm_link;
pub mod github_link;
pub mod language_switch;
pub mod particle_field;
pub mod source_badge;
pub mod tool_card;

pub use github_link::GithubLink;
pub use language_switch::LanguageSwitch;
pub use particle_field::InteractiveBackground;
pub use source_badge::SourceBadge;
pub use tool_card::ToolCard;
