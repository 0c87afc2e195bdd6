// Résumé content: typed collections, validation and loading from disk.

pub mod loader;
pub mod schema;

pub use loader::ContentDir;
pub use schema::{
    Course, Education, Experience, HexColor, Profile, ResumeContent, Skill, StackEntry,
};
