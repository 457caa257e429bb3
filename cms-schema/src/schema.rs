//! Reusable block construction and schema assembly.
//!
//! Both builders follow the same contract: every mutator consumes the
//! builder and returns a new value, so any intermediate state is a usable
//! snapshot in its own right.

use chrono::{DateTime, Duration, SecondsFormat, Timelike, Utc};

use crate::id::IdGenerator;
use crate::types::{
    ApiField, ApiSchema, BlockField, CustomFieldBlock, CustomFieldEntry, Field, FieldEntry,
    RepeaterFieldEntry,
};

/// Mints the `createdAt`/`updatedAt` stamps that double as block reference
/// keys.
///
/// The base instant is captured once, truncated to the second; each stamp
/// advances by one millisecond. Keys minted by one stamper can therefore
/// never collide with each other, unlike a wall-clock read with random
/// sub-second jitter. Keys still render as ordinary ISO-8601 timestamps so
/// existing documents keep their shape.
#[derive(Debug)]
pub struct BlockStamper {
    base: DateTime<Utc>,
    counter: i64,
}

impl BlockStamper {
    /// Create a stamper based on the current instant.
    pub fn new() -> Self {
        Self::with_base(Utc::now())
    }

    /// Create a stamper from a fixed base instant, for deterministic tests.
    pub fn with_base(base: DateTime<Utc>) -> Self {
        Self {
            base: base.with_nanosecond(0).unwrap_or(base),
            counter: 0,
        }
    }

    /// Mint the next session-unique stamp.
    pub fn next(&mut self) -> String {
        let at = self.base + Duration::milliseconds(self.counter);
        self.counter += 1;
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl Default for BlockStamper {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrite a descriptor into its serialized entry form, collecting every
/// block it embeds.
fn rewrite(field: Field, blocks: &mut Vec<CustomFieldBlock>) -> FieldEntry {
    match field {
        Field::Text(f) => FieldEntry::Text(f),
        Field::TextArea(f) => FieldEntry::TextArea(f),
        Field::RichEditorV2(f) => FieldEntry::RichEditorV2(f),
        Field::Media(f) => FieldEntry::Media(f),
        Field::MediaList(f) => FieldEntry::MediaList(f),
        Field::Date(f) => FieldEntry::Date(f),
        Field::Boolean(f) => FieldEntry::Boolean(f),
        Field::Select(f) => FieldEntry::Select(f),
        Field::File(f) => FieldEntry::File(f),
        Field::Number(f) => FieldEntry::Number(f),
        Field::Relation(f) => FieldEntry::Relation(f),
        Field::RelationList(f) => FieldEntry::RelationList(f),
        Field::Iframe(f) => FieldEntry::Iframe(f),
        Field::Custom(f) => {
            let created_at = f.block.created_at.clone();
            blocks.push(*f.block);
            FieldEntry::Custom(CustomFieldEntry {
                name: f.name,
                description: f.description,
                required: f.required,
                custom_field_created_at: created_at,
            })
        }
        Field::Repeater(f) => {
            let list = f.blocks.iter().map(|b| b.created_at.clone()).collect();
            blocks.extend(f.blocks);
            FieldEntry::Repeater(RepeaterFieldEntry {
                name: f.name,
                description: f.description,
                required: f.required,
                repeater_count_limit_validation: f.repeater_count_limit_validation,
                custom_field_created_at_list: list,
            })
        }
    }
}

/// Record a block under its reference key: first write wins placement,
/// a later write with the same key replaces the stored record in place.
/// Blocks the record embeds are registered right after it.
fn record(blocks: &mut Vec<CustomFieldBlock>, mut block: CustomFieldBlock) {
    let embedded = std::mem::take(&mut block.embedded);
    if let Some(slot) = blocks
        .iter_mut()
        .find(|existing| existing.created_at == block.created_at)
    {
        *slot = block;
    } else {
        blocks.push(block);
    }
    for inner in embedded {
        record(blocks, inner);
    }
}

/// Declares a reusable custom field block.
///
/// The builder takes the block's own field id and display name directly, so
/// a block shared by several repeaters can be declared once, independently
/// of any consuming field. Custom-kind descriptors must not be registered as
/// block fields; the product does not support nesting them.
///
/// ```
/// use cms_schema::fields::{self, TextFieldParams};
/// use cms_schema::id::IdGenerator;
/// use cms_schema::schema::{BlockStamper, CustomFieldBuilder};
///
/// let mut ids = IdGenerator::new();
/// let mut stamper = BlockStamper::new();
/// let author = CustomFieldBuilder::new("author", "Author")
///     .field(
///         "name",
///         fields::text(&mut ids, TextFieldParams {
///             display_name: "Name".into(),
///             ..Default::default()
///         }),
///     )
///     .build(&mut ids, &mut stamper);
/// assert_eq!(author.fields.len(), 1);
/// assert_eq!(author.created_at, author.updated_at);
/// ```
#[derive(Debug, Clone)]
pub struct CustomFieldBuilder {
    field_id: String,
    name: String,
    fields: Vec<(String, Field)>,
}

impl CustomFieldBuilder {
    pub fn new(field_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Register a field under `field_id`. Declaring the same id again
    /// replaces the earlier descriptor but keeps its position.
    pub fn field(mut self, field_id: impl Into<String>, field: Field) -> Self {
        let field_id = field_id.into();
        if let Some(slot) = self.fields.iter_mut().find(|(id, _)| *id == field_id) {
            slot.1 = field;
        } else {
            self.fields.push((field_id, field));
        }
        self
    }

    /// Build the immutable block.
    ///
    /// Each field gets a generated identifier; a text descriptor's own
    /// pre-minted `idValue` takes precedence over the assigned one. Both
    /// stamps are set to the same instant and `position` is a single column
    /// in declaration order.
    pub fn build(self, ids: &mut IdGenerator, stamper: &mut BlockStamper) -> CustomFieldBlock {
        let at = stamper.next();
        let mut embedded = Vec::new();
        let mut fields = Vec::with_capacity(self.fields.len());
        for (field_id, field) in self.fields {
            let assigned = ids.generate();
            let (entry, own_id) = match field {
                Field::Text(mut text) => {
                    let own_id = text.id_value.take();
                    (rewrite(Field::Text(text), &mut embedded), own_id)
                }
                other => (rewrite(other, &mut embedded), None),
            };
            fields.push(BlockField {
                id_value: own_id.unwrap_or(assigned),
                field_id,
                entry,
            });
        }
        let position = vec![fields.iter().map(|field| field.id_value.clone()).collect()];
        CustomFieldBlock {
            created_at: at.clone(),
            field_id: self.field_id,
            name: self.name,
            fields,
            position,
            updated_at: at,
            viewer_group: ids.generate_len(3),
            embedded,
        }
    }
}

/// Assembles the schema document from an ordered set of top-level fields.
///
/// ```
/// use cms_schema::fields::{self, TextFieldParams};
/// use cms_schema::id::IdGenerator;
/// use cms_schema::schema::ApiSchemaBuilder;
///
/// let mut ids = IdGenerator::new();
/// let schema = ApiSchemaBuilder::new()
///     .field(
///         "title",
///         fields::text(&mut ids, TextFieldParams {
///             display_name: "Title".into(),
///             required: Some(true),
///             ..Default::default()
///         }),
///     )
///     .build();
/// assert_eq!(schema.api_fields[0].field_id, "title");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiSchemaBuilder {
    fields: Vec<(String, Field)>,
}

impl ApiSchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level field under `field_id`. Declaring the same id
    /// again replaces the earlier descriptor but keeps its position.
    pub fn field(mut self, field_id: impl Into<String>, field: Field) -> Self {
        let field_id = field_id.into();
        if let Some(slot) = self.fields.iter_mut().find(|(id, _)| *id == field_id) {
            slot.1 = field;
        } else {
            self.fields.push((field_id, field));
        }
        self
    }

    /// Produce the schema document in a single left-to-right pass.
    ///
    /// Custom and repeater descriptors are reduced to their reference keys;
    /// every referenced block lands in `custom_fields` exactly once, in
    /// first-seen order.
    pub fn build(self) -> ApiSchema {
        let mut custom_fields: Vec<CustomFieldBlock> = Vec::new();
        let mut api_fields = Vec::with_capacity(self.fields.len());
        for (field_id, field) in self.fields {
            let mut collected = Vec::new();
            let entry = rewrite(field, &mut collected);
            for block in collected {
                record(&mut custom_fields, block);
            }
            api_fields.push(ApiField { field_id, entry });
        }
        ApiSchema {
            api_fields,
            custom_fields,
        }
    }
}
