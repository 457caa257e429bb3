//! Field descriptor factories, one per supported field kind.
//!
//! Every factory applies default-omission semantics: an optional input that
//! was not supplied produces an absent output property, never `null` or an
//! empty placeholder. The one deliberate exception is [`select`], whose
//! computed initial-value list is always present (see the function docs).
//!
//! Factories perform no validation. An inverted range or a nonsensical URL
//! passes through unchanged; catching those is the console's job, not ours.

use crate::id::IdGenerator;
use crate::types::{
    BooleanField, CustomClassItem, CustomField, CustomFieldBlock, DateField, Field, FileField,
    IframeField, ImageSize, ImageSizeValidation, Limit, MediaField, MediaListField,
    MediaListLayout, NumberField, NumberRange, NumberSizeLimitValidation, PatternMatchValidation,
    RegexpPattern, RelationField, RelationListCountLimitValidation, RelationListField,
    RepeaterCountLimitValidation, RepeaterField, RichEditorV2Field, RichEditorV2Option,
    SelectField, SelectItem, TextAreaField, TextField, TextSizeLimitValidation,
};

/// A regular expression as source text plus flag characters.
///
/// Empty flags serialize as an explicit `null` in the pattern validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Regexp {
    pub pattern: String,
    pub flags: String,
}

impl Regexp {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            flags: String::new(),
        }
    }

    pub fn with_flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }
}

impl From<Regexp> for PatternMatchValidation {
    fn from(regexp: Regexp) -> Self {
        Self {
            regexp: RegexpPattern {
                pattern: regexp.pattern,
                flags: if regexp.flags.is_empty() {
                    None
                } else {
                    Some(regexp.flags)
                },
            },
        }
    }
}

/// A rich-editor custom class prior to id assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomClass {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default)]
pub struct TextFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub is_unique: Option<bool>,
    /// Minimum and maximum character count.
    pub length: Option<Limit>,
    /// Restrict input to this pattern.
    pub regexp: Option<Regexp>,
}

/// Single-line text. Always mints a fresh `idValue` for the descriptor.
pub fn text(ids: &mut IdGenerator, params: TextFieldParams) -> Field {
    Field::Text(TextField {
        id_value: Some(ids.generate()),
        name: params.display_name,
        description: params.description,
        required: params.required,
        is_unique: params.is_unique,
        text_size_limit_validation: params
            .length
            .map(|text_size| TextSizeLimitValidation { text_size }),
        pattern_match_validation: params.regexp.map(PatternMatchValidation::from),
    })
}

#[derive(Debug, Clone, Default)]
pub struct TextAreaFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub length: Option<Limit>,
    pub regexp: Option<Regexp>,
}

/// Multi-line plain text.
pub fn text_area(params: TextAreaFieldParams) -> Field {
    Field::TextArea(TextAreaField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        text_size_limit_validation: params
            .length
            .map(|text_size| TextSizeLimitValidation { text_size }),
        pattern_match_validation: params.regexp.map(PatternMatchValidation::from),
    })
}

#[derive(Debug, Clone, Default)]
pub struct RichEditorV2FieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Toolbar restriction. Undo, redo and clean are always on and are
    /// prepended to this list; omit the list to leave the toolbar
    /// unrestricted.
    pub rich_editor_v2_options: Option<Vec<RichEditorV2Option>>,
    pub custom_class_list: Option<Vec<CustomClass>>,
}

/// Rich text editor.
pub fn rich_editor_v2(ids: &mut IdGenerator, params: RichEditorV2FieldParams) -> Field {
    let rich_editor_v2_options = params.rich_editor_v2_options.map(|options| {
        let mut all = vec![
            RichEditorV2Option::Undo,
            RichEditorV2Option::Redo,
            RichEditorV2Option::Clean,
        ];
        all.extend(options);
        all
    });
    let custom_class_list = params.custom_class_list.map(|classes| {
        classes
            .into_iter()
            .map(|class| CustomClassItem {
                id: ids.generate(),
                name: class.name,
                value: class.value,
            })
            .collect()
    });
    Field::RichEditorV2(RichEditorV2Field {
        name: params.display_name,
        description: params.description,
        required: params.required,
        rich_editor_v2_options,
        custom_class_list,
    })
}

#[derive(Debug, Clone, Default)]
pub struct MediaFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Required width and height of the image in pixels.
    pub size: Option<ImageSize>,
}

/// Single image.
pub fn media(params: MediaFieldParams) -> Field {
    Field::Media(MediaField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        image_size_validation: params
            .size
            .map(|image_size| ImageSizeValidation { image_size }),
    })
}

#[derive(Debug, Clone, Default)]
pub struct MediaListFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub size: Option<ImageSize>,
    /// Admin-console layout. Left absent here, the console applies its own
    /// default; the factory never substitutes one.
    pub layout: Option<MediaListLayout>,
}

/// Multiple images.
pub fn media_list(params: MediaListFieldParams) -> Field {
    Field::MediaList(MediaListField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        image_size_validation: params
            .size
            .map(|image_size| ImageSizeValidation { image_size }),
        media_list_layout: params.layout,
    })
}

#[derive(Debug, Clone, Default)]
pub struct DateFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub date_format: Option<bool>,
}

/// Date picker.
pub fn date(params: DateFieldParams) -> Field {
    Field::Date(DateField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        date_format: params.date_format,
    })
}

#[derive(Debug, Clone, Default)]
pub struct BooleanFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub initial_value: Option<bool>,
}

/// On/off toggle. An explicit `false` initial value is preserved.
pub fn boolean(params: BooleanFieldParams) -> Field {
    Field::Boolean(BooleanField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        boolean_initial_value: params.initial_value,
    })
}

#[derive(Debug, Clone, Default)]
pub struct SelectFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Choices in display order. Duplicate values are kept and each
    /// occurrence gets its own id.
    pub select_items: Vec<String>,
    /// Values preselected on a new content. Values that do not occur in
    /// `select_items` are dropped silently.
    pub select_initial_value: Option<Vec<String>>,
    pub multiple: Option<bool>,
}

/// Fixed choices.
///
/// The computed initial-value list is always emitted, empty when nothing
/// matched or nothing was supplied.
pub fn select(ids: &mut IdGenerator, params: SelectFieldParams) -> Field {
    let select_items: Vec<SelectItem> = params
        .select_items
        .into_iter()
        .map(|value| SelectItem {
            value,
            id: ids.generate(),
        })
        .collect();
    let initial = params.select_initial_value.unwrap_or_default();
    let select_initial_value = select_items
        .iter()
        .filter(|item| initial.contains(&item.value))
        .map(|item| item.id.clone())
        .collect();
    Field::Select(SelectField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        select_items,
        select_initial_value,
        multiple_select: params.multiple,
    })
}

#[derive(Debug, Clone, Default)]
pub struct FileFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
}

/// File attachment.
pub fn file(params: FileFieldParams) -> Field {
    Field::File(FileField {
        name: params.display_name,
        description: params.description,
        required: params.required,
    })
}

#[derive(Debug, Clone, Default)]
pub struct NumberFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Minimum and maximum accepted value.
    pub range: Option<NumberRange>,
}

/// Number input.
pub fn number(params: NumberFieldParams) -> Field {
    Field::Number(NumberField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        number_size_limit_validation: params
            .range
            .map(|number_size| NumberSizeLimitValidation { number_size }),
    })
}

#[derive(Debug, Clone, Default)]
pub struct RelationFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
}

/// Reference to a single content of another API.
pub fn relation(params: RelationFieldParams) -> Field {
    Field::Relation(RelationField {
        name: params.display_name,
        description: params.description,
        required: params.required,
    })
}

#[derive(Debug, Clone, Default)]
pub struct RelationListFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Minimum and maximum number of referenced contents.
    pub limit: Option<Limit>,
}

/// Reference to multiple contents of another API.
pub fn relation_list(params: RelationListFieldParams) -> Field {
    Field::RelationList(RelationListField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        relation_list_count_limit_validation: params
            .limit
            .map(|relation_list_count| RelationListCountLimitValidation { relation_list_count }),
    })
}

#[derive(Debug, Clone, Default)]
pub struct IframeFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    pub iframe_url: Option<String>,
}

/// Embedded external content.
pub fn iframe(params: IframeFieldParams) -> Field {
    Field::Iframe(IframeField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        iframe_url: params.iframe_url,
    })
}

#[derive(Debug, Clone, Default)]
pub struct RepeaterFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Blocks the repeater may instantiate, in selection order.
    pub blocks: Vec<CustomFieldBlock>,
    /// Minimum and maximum number of repetitions.
    pub limit: Option<Limit>,
}

/// Repeatable group of reusable blocks.
pub fn repeater(params: RepeaterFieldParams) -> Field {
    Field::Repeater(RepeaterField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        repeater_count_limit_validation: params
            .limit
            .map(|repeat_count| RepeaterCountLimitValidation { repeat_count }),
        blocks: params.blocks,
    })
}

#[derive(Debug, Clone)]
pub struct CustomFieldParams {
    pub display_name: String,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// The single reusable block this field embeds.
    pub block: CustomFieldBlock,
}

/// One reusable block embedded as a field.
pub fn custom(params: CustomFieldParams) -> Field {
    Field::Custom(CustomField {
        name: params.display_name,
        description: params.description,
        required: params.required,
        block: Box::new(params.block),
    })
}
