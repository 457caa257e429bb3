//! Data model for schema documents and field definitions.
//!
//! Everything that can appear in a serialized schema document lives here.
//! Optional properties are modeled as `Option` and omitted from the output
//! entirely when absent, so a round trip through JSON never introduces
//! `null` values the admin console would reject.

use serde::{Deserialize, Serialize};

/// Inclusive `min`/`max` pair used by the count- and length-style validations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limit {
    pub min: i64,
    pub max: i64,
}

/// Inclusive numeric range for number fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

/// Character-count restriction for text and text-area fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSizeLimitValidation {
    pub text_size: Limit,
}

/// Pattern restriction for text and text-area fields.
///
/// `flags` is always serialized; a pattern declared without flags carries an
/// explicit `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternMatchValidation {
    pub regexp: RegexpPattern,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegexpPattern {
    pub pattern: String,
    pub flags: Option<String>,
}

/// Pixel-size restriction for media fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSizeValidation {
    pub image_size: ImageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: i64,
    pub height: i64,
}

/// Value restriction for number fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSizeLimitValidation {
    pub number_size: NumberRange,
}

/// Entry-count restriction for relation-list fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationListCountLimitValidation {
    pub relation_list_count: Limit,
}

/// Repetition-count restriction for repeater fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeaterCountLimitValidation {
    pub repeat_count: Limit,
}

/// One choice of a select field. Every item gets its own generated id, even
/// when two items share the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItem {
    pub value: String,
    pub id: String,
}

/// A registered custom class for the rich editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomClassItem {
    pub id: String,
    pub name: String,
    pub value: String,
}

/// Toolbar actions of the rich editor.
///
/// `Undo`, `Redo` and `Clean` are always enabled; the factory prepends them
/// to whatever restriction the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RichEditorV2Option {
    Undo,
    Redo,
    Clean,
    CustomClass,
    Link,
    Image,
    Oembedly,
    ListOrdered,
    ListBullet,
    HorizontalRule,
    Bold,
    HeaderOne,
    HeaderTwo,
    Italic,
    Blockquote,
    CodeBlock,
    Underline,
    Strike,
    Table,
    Code,
    TextAlign,
    HeaderThree,
    HeaderFour,
    HeaderFive,
}

/// Admin-console layout of a media list field.
///
/// When absent the console falls back to its own default (horizontal
/// scroll); the builder never fills this in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaListLayout {
    #[serde(rename = "HORIZONTAL_SCROLL")]
    HorizontalScroll,
    #[serde(rename = "GRID_2")]
    Grid2,
    #[serde(rename = "GRID_3")]
    Grid3,
    #[serde(rename = "GRID_4")]
    Grid4,
}

/// Single-line text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    /// Generated per text field, independent of the identifier a block
    /// assigns when the field is placed inside one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_value: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_unique: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size_limit_validation: Option<TextSizeLimitValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_match_validation: Option<PatternMatchValidation>,
}

/// Multi-line plain text field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAreaField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_size_limit_validation: Option<TextSizeLimitValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_match_validation: Option<PatternMatchValidation>,
}

/// Rich text field, edited as HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichEditorV2Field {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rich_editor_v2_options: Option<Vec<RichEditorV2Option>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_class_list: Option<Vec<CustomClassItem>>,
}

/// Single image field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size_validation: Option<ImageSizeValidation>,
}

/// Multiple-image field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaListField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size_validation: Option<ImageSizeValidation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_list_layout: Option<MediaListLayout>,
}

/// Date (and optionally time) field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_format: Option<bool>,
}

/// On/off toggle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boolean_initial_value: Option<bool>,
}

/// Fixed-choice field.
///
/// Unlike other optional inputs, `select_initial_value` is always present in
/// the serialized form: an omitted or unmatched initial value produces an
/// empty list, not an absent key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default)]
    pub select_items: Vec<SelectItem>,
    #[serde(default)]
    pub select_initial_value: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple_select: Option<bool>,
}

/// File attachment field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Numeric field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_size_limit_validation: Option<NumberSizeLimitValidation>,
}

/// Reference to a single content of another API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Reference to multiple contents of another API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationListField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation_list_count_limit_validation: Option<RelationListCountLimitValidation>,
}

/// Embedded external content field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IframeField {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iframe_url: Option<String>,
}

/// A custom field descriptor before assembly: carries the reusable block it
/// points at. The assembler replaces the block with its `createdAt`
/// reference key and registers the block itself in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomField {
    pub name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub block: Box<CustomFieldBlock>,
}

/// A repeater descriptor before assembly: carries every reusable block the
/// repeater may instantiate, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RepeaterField {
    pub name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub repeater_count_limit_validation: Option<RepeaterCountLimitValidation>,
    pub blocks: Vec<CustomFieldBlock>,
}

/// Serialized form of a custom field: the embedded block is reduced to its
/// reference key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    pub custom_field_created_at: String,
}

/// Serialized form of a repeater: blocks reduced to an ordered list of
/// reference keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeaterFieldEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeater_count_limit_validation: Option<RepeaterCountLimitValidation>,
    pub custom_field_created_at_list: Vec<String>,
}

/// A field definition as produced by the factories in [`crate::fields`].
///
/// Descriptors never carry their own field id; the id is the key under which
/// a descriptor is registered with a builder, so id uniqueness is a property
/// of the container rather than the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Text(TextField),
    TextArea(TextAreaField),
    RichEditorV2(RichEditorV2Field),
    Media(MediaField),
    MediaList(MediaListField),
    Date(DateField),
    Boolean(BooleanField),
    Select(SelectField),
    File(FileField),
    Number(NumberField),
    Relation(RelationField),
    RelationList(RelationListField),
    Iframe(IframeField),
    Custom(CustomField),
    Repeater(RepeaterField),
}

/// A field as it appears in a serialized document, discriminated by `kind`.
/// Custom and repeater entries hold reference keys instead of blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FieldEntry {
    Text(TextField),
    TextArea(TextAreaField),
    RichEditorV2(RichEditorV2Field),
    Media(MediaField),
    MediaList(MediaListField),
    Date(DateField),
    Boolean(BooleanField),
    Select(SelectField),
    File(FileField),
    Number(NumberField),
    Relation(RelationField),
    RelationList(RelationListField),
    Iframe(IframeField),
    Custom(CustomFieldEntry),
    Repeater(RepeaterFieldEntry),
}

/// A top-level field of a schema document, tagged with the id it was
/// registered under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiField {
    pub field_id: String,
    #[serde(flatten)]
    pub entry: FieldEntry,
}

/// A field inside a reusable block, stamped with the display identifier the
/// block builder assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockField {
    pub id_value: String,
    pub field_id: String,
    #[serde(flatten)]
    pub entry: FieldEntry,
}

/// A reusable group of fields, referenced from custom and repeater fields by
/// its `created_at` key.
///
/// Immutable once built; `created_at` doubles as the block's identity within
/// a schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldBlock {
    pub created_at: String,
    pub field_id: String,
    pub name: String,
    pub fields: Vec<BlockField>,
    /// One or two ordered columns of `id_value`s describing the editor
    /// layout; the builder emits a single column in declaration order.
    pub position: Vec<Vec<String>>,
    pub updated_at: String,
    pub viewer_group: String,
    /// Blocks referenced by nested repeater fields, carried along so the
    /// assembler can register them with the document. Not serialized.
    #[serde(skip)]
    pub(crate) embedded: Vec<CustomFieldBlock>,
}

/// The root artifact: ordered top-level fields plus every reusable block
/// they reference, each block exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSchema {
    pub api_fields: Vec<ApiField>,
    pub custom_fields: Vec<CustomFieldBlock>,
}
