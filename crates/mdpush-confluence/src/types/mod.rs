//! Confluence API types.

mod page;

pub use page::{
    Body, Content, EDITOR_REPRESENTATION, Links, Page, PageUpdate, Version, VersionUpdate,
};
