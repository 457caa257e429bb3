//! # cms-schema
//!
//! Build headless-CMS API schema documents in code instead of clicking them
//! together in the admin console.
//!
//! A schema document describes every field of one content type plus the
//! reusable "custom field" blocks those fields reference. This crate covers
//! the write side of that pipeline: declaring fields, grouping them into
//! reusable blocks, and assembling the final document. The companion
//! `cms-typegen` crate reads serialized documents back and emits TypeScript
//! types for them.
//!
//! ## Quick Start
//!
//! ```rust
//! use cms_schema::fields::{self, CustomFieldParams, SelectFieldParams, TextFieldParams};
//! use cms_schema::id::IdGenerator;
//! use cms_schema::schema::{ApiSchemaBuilder, BlockStamper, CustomFieldBuilder};
//!
//! let mut ids = IdGenerator::new();
//! let mut stamper = BlockStamper::new();
//!
//! // A reusable block, declared once...
//! let author = CustomFieldBuilder::new("author", "Author")
//!     .field(
//!         "name",
//!         fields::text(&mut ids, TextFieldParams {
//!             display_name: "Name".into(),
//!             required: Some(true),
//!             ..Default::default()
//!         }),
//!     )
//!     .build(&mut ids, &mut stamper);
//!
//! // ...and a document that references it.
//! let schema = ApiSchemaBuilder::new()
//!     .field(
//!         "title",
//!         fields::text(&mut ids, TextFieldParams {
//!             display_name: "Title".into(),
//!             required: Some(true),
//!             ..Default::default()
//!         }),
//!     )
//!     .field(
//!         "category",
//!         fields::select(&mut ids, SelectFieldParams {
//!             display_name: "Category".into(),
//!             select_items: vec!["News".into(), "Opinion".into()],
//!             ..Default::default()
//!         }),
//!     )
//!     .field(
//!         "author",
//!         fields::custom(CustomFieldParams {
//!             display_name: "Author".into(),
//!             description: None,
//!             required: None,
//!             block: author,
//!         }),
//!     )
//!     .build();
//!
//! assert_eq!(schema.api_fields.len(), 3);
//! assert_eq!(schema.custom_fields.len(), 1);
//! ```
//!
//! Serialize the result with serde to get the JSON document the console and
//! the type generator understand.
//!
//! ## Design notes
//!
//! - Field descriptors never carry their own field id; ids are the keys
//!   under which descriptors are registered, so uniqueness is enforced by
//!   the container.
//! - Builders are immutable: every call consumes the builder and returns a
//!   new snapshot.
//! - Randomness is an explicit dependency ([`id::IdGenerator`]), never
//!   process-wide state, so construction can be made fully deterministic in
//!   tests.
//! - A block's `createdAt` stamp is its reference key. Stamps are minted by
//!   [`schema::BlockStamper`], which guarantees session uniqueness instead
//!   of betting on wall-clock jitter.

pub mod fields;
pub mod id;
pub mod schema;
pub mod types;

pub use id::IdGenerator;
pub use schema::{ApiSchemaBuilder, BlockStamper, CustomFieldBuilder};
pub use types::{ApiField, ApiSchema, CustomFieldBlock, Field, FieldEntry};
