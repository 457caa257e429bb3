//! TypeScript type generation from schema documents.
//!
//! For every document the generator emits one type per reusable block plus
//! one top-level type, resolving custom/repeater references through the
//! `createdAt` key of the target block. A reference that cannot be resolved
//! aborts generation for that schema; a kind this tool does not know yet
//! degrades to `unknown`.

use crate::document::{DocumentField, SchemaDocument};
use crate::error::GenerateError;
use convert_case::{Case, Casing};
use std::collections::HashMap;

/// Reference type rendered for relation and relation-list fields.
pub const RELATION_TYPE: &str = "CmsRelation<unknown | null>";

/// Reference type rendered for media and media-list fields.
pub const IMAGE_TYPE: &str = "CmsImage";

/// Contents of the shared reference-type module generated next to the
/// per-schema files.
pub const SHARED_TYPES: &str = "/** CMS content id */
type CmsContentId = {
  id: string;
}

/** CMS content common dates */
type CmsDate = {
  createdAt: string;
  updatedAt: string;
  publishedAt?: string;
  revisedAt?: string;
}

/** CMS image */
export type CmsImage = {
  url: string;
  width?: number;
  height?: number;
}

/** CMS list content common types */
type CmsListContent = CmsContentId & CmsDate;

/** CMS relation fields */
export type CmsRelation<T> = T & CmsListContent;
";

/// Per-field type descriptions of one schema, references already resolved.
#[derive(Debug, Clone)]
pub struct ConvertedSchema {
    /// Rendered top-level fields.
    pub main: Vec<String>,
    /// Rendered fields per reusable block, keyed by the block's field id,
    /// in document order.
    pub customs: Vec<(String, Vec<String>)>,
}

/// Generates TypeScript source from schema documents.
#[derive(Debug, Clone)]
pub struct TypeGenerator {
    shared_module: String,
}

impl TypeGenerator {
    /// Create a generator importing shared types from `shared_module`.
    pub fn new(shared_module: impl Into<String>) -> Self {
        Self {
            shared_module: shared_module.into(),
        }
    }

    /// Resolve every field of the document into a type description.
    pub fn convert(
        &self,
        type_name: &str,
        doc: &SchemaDocument,
    ) -> Result<ConvertedSchema, GenerateError> {
        let blocks: HashMap<&str, &str> = doc
            .custom_fields
            .iter()
            .map(|block| (block.created_at.as_str(), block.field_id.as_str()))
            .collect();

        let main = doc
            .api_fields
            .iter()
            .map(|field| self.render_field(type_name, field, &blocks))
            .collect::<Result<Vec<_>, _>>()?;

        let mut customs = Vec::with_capacity(doc.custom_fields.len());
        for block in &doc.custom_fields {
            let mut fields = vec![format!(
                "{}\nfieldId: '{}'",
                doc_comment("fieldId"),
                block.field_id
            )];
            for field in &block.fields {
                fields.push(self.render_field(type_name, field, &blocks)?);
            }
            customs.push((block.field_id.clone(), fields));
        }

        Ok(ConvertedSchema { main, customs })
    }

    /// Render a converted schema as TypeScript source: the top-level type
    /// first, then one type per reusable block.
    pub fn render(&self, type_name: &str, converted: &ConvertedSchema) -> String {
        let mut out = String::new();
        push_type_block(&mut out, type_name, &converted.main);
        for (block_id, fields) in &converted.customs {
            let name = format!("{type_name}CustomField{}", pascal_case(block_id));
            push_type_block(&mut out, &name, fields);
        }
        out
    }

    /// Convert and render, prepending the shared-type import when the
    /// output references `CmsRelation` or `CmsImage`.
    pub fn generate(&self, type_name: &str, doc: &SchemaDocument) -> Result<String, GenerateError> {
        let converted = self.convert(type_name, doc)?;
        let schema = self.render(type_name, &converted);

        let uses_relation = schema.contains("CmsRelation");
        let uses_image = schema.contains("CmsImage");
        let import = match (uses_relation, uses_image) {
            (true, true) => format!(
                "import {{ CmsRelation, CmsImage }} from './{}';\n\n",
                self.shared_module
            ),
            (true, false) => format!(
                "import {{ CmsRelation }} from './{}';\n\n",
                self.shared_module
            ),
            (false, true) => format!(
                "import {{ CmsImage }} from './{}';\n\n",
                self.shared_module
            ),
            (false, false) => String::new(),
        };

        Ok(format!("{import}{schema}"))
    }

    /// Render one field as a doc comment plus a property line.
    fn render_field(
        &self,
        type_name: &str,
        field: &DocumentField,
        blocks: &HashMap<&str, &str>,
    ) -> Result<String, GenerateError> {
        // A hyphenated field id is not a valid bare identifier.
        let property = if is_kebab_case(&field.field_id) {
            format!("\"{}\"", field.field_id)
        } else {
            field.field_id.clone()
        };
        let optional = if field.required.unwrap_or(false) {
            ""
        } else {
            "?"
        };
        Ok(format!(
            "{}\n{}{}: {}",
            doc_comment(&field.name),
            property,
            optional,
            self.kind_type(type_name, field, blocks)?
        ))
    }

    /// Compute the type expression for one field by kind.
    fn kind_type(
        &self,
        type_name: &str,
        field: &DocumentField,
        blocks: &HashMap<&str, &str>,
    ) -> Result<String, GenerateError> {
        let ty = match field.kind.as_str() {
            "text" | "textArea" | "richEditor" | "richEditorV2" | "date" => "string".to_string(),
            "number" => "number".to_string(),
            "boolean" => "boolean".to_string(),
            "select" => select_type(field),
            "relation" => RELATION_TYPE.to_string(),
            "relationList" => format!("{RELATION_TYPE}[]"),
            "media" => IMAGE_TYPE.to_string(),
            "mediaList" => format!("{IMAGE_TYPE}[]"),
            "file" => "{ url: string }".to_string(),
            "iframe" => "unknown".to_string(),
            "custom" => {
                let key = field.custom_field_created_at.as_deref().unwrap_or_default();
                self.block_type_name(type_name, field, key, blocks)?
            }
            "repeater" => {
                let keys = field
                    .custom_field_created_at_list
                    .as_deref()
                    .unwrap_or_default();
                let names = keys
                    .iter()
                    .map(|key| self.block_type_name(type_name, field, key, blocks))
                    .collect::<Result<Vec<_>, _>>()?;
                let union = names.join(" | ");
                if names.len() > 1 {
                    format!("({union})[]")
                } else {
                    format!("{union}[]")
                }
            }
            _ => "unknown".to_string(),
        };
        Ok(ty)
    }

    /// Resolve a block reference to its generated type name.
    fn block_type_name(
        &self,
        type_name: &str,
        field: &DocumentField,
        created_at: &str,
        blocks: &HashMap<&str, &str>,
    ) -> Result<String, GenerateError> {
        let block_id = blocks
            .get(created_at)
            .ok_or_else(|| GenerateError::unresolved(type_name, &field.field_id, created_at))?;
        Ok(format!("{type_name}CustomField{}", pascal_case(block_id)))
    }
}

/// Type expression for a select field: a union of its literal values,
/// rendered as an array when multiple selection is allowed and as a
/// single-element tuple otherwise.
fn select_type(field: &DocumentField) -> String {
    let items = field.select_items.as_deref().unwrap_or_default();
    let union = items
        .iter()
        .map(|item| format!("'{}'", item.value))
        .collect::<Vec<_>>()
        .join(" | ");
    if field.multiple_select.unwrap_or(false) {
        if items.len() > 1 {
            format!("({union})[]")
        } else {
            format!("{union}[]")
        }
    } else {
        format!("[{union}]")
    }
}

fn doc_comment(name: &str) -> String {
    format!("/**\n * {name}\n */")
}

fn push_type_block(out: &mut String, name: &str, fields: &[String]) {
    out.push_str(&format!("export type {name} = {{\n"));
    for field in fields {
        for line in field.split('\n') {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out.push_str("}\n\n");
}

/// Convert to PascalCase.
pub fn pascal_case(s: &str) -> String {
    s.to_case(Case::Pascal)
}

/// True iff the string contains a hyphen and therefore cannot be a bare
/// identifier.
pub fn is_kebab_case(s: &str) -> bool {
    s.contains('-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentCustomField, DocumentSelectItem};

    fn generator() -> TypeGenerator {
        TypeGenerator::new("cms-schema")
    }

    fn field(field_id: &str, name: &str, kind: &str) -> DocumentField {
        DocumentField {
            field_id: field_id.into(),
            name: name.into(),
            kind: kind.into(),
            ..Default::default()
        }
    }

    fn select_field(values: &[&str], multiple: Option<bool>) -> DocumentField {
        DocumentField {
            select_items: Some(
                values
                    .iter()
                    .map(|value| DocumentSelectItem {
                        value: (*value).into(),
                    })
                    .collect(),
            ),
            multiple_select: multiple,
            ..field("category", "Category", "select")
        }
    }

    fn doc_with(api_fields: Vec<DocumentField>) -> SchemaDocument {
        SchemaDocument {
            api_fields,
            custom_fields: vec![],
        }
    }

    fn block(created_at: &str, field_id: &str, fields: Vec<DocumentField>) -> DocumentCustomField {
        DocumentCustomField {
            created_at: created_at.into(),
            field_id: field_id.into(),
            fields,
        }
    }

    #[test]
    fn primitive_kinds_map_to_their_types() {
        let cases = [
            ("text", "string"),
            ("textArea", "string"),
            ("richEditor", "string"),
            ("richEditorV2", "string"),
            ("date", "string"),
            ("number", "number"),
            ("boolean", "boolean"),
            ("relation", "CmsRelation<unknown | null>"),
            ("relationList", "CmsRelation<unknown | null>[]"),
            ("media", "CmsImage"),
            ("mediaList", "CmsImage[]"),
            ("file", "{ url: string }"),
            ("iframe", "unknown"),
            ("hologram", "unknown"),
        ];
        for (kind, expected) in cases {
            let converted = generator()
                .convert("Post", &doc_with(vec![field("value", "Value", kind)]))
                .unwrap();
            assert!(
                converted.main[0].ends_with(&format!("value?: {expected}")),
                "kind {kind}: got {}",
                converted.main[0]
            );
        }
    }

    #[test]
    fn multiple_select_renders_a_parenthesized_union_array() {
        let converted = generator()
            .convert("Post", &doc_with(vec![select_field(&["A", "B"], Some(true))]))
            .unwrap();
        assert!(converted.main[0].ends_with("category?: ('A' | 'B')[]"));
    }

    #[test]
    fn multiple_select_with_one_item_skips_the_parentheses() {
        let converted = generator()
            .convert("Post", &doc_with(vec![select_field(&["A"], Some(true))]))
            .unwrap();
        assert!(converted.main[0].ends_with("category?: 'A'[]"));
    }

    #[test]
    fn single_select_renders_a_tuple() {
        let converted = generator()
            .convert("Post", &doc_with(vec![select_field(&["A", "B"], None)]))
            .unwrap();
        assert!(converted.main[0].ends_with("category?: ['A' | 'B']"));
    }

    #[test]
    fn required_field_has_no_optional_marker() {
        let mut title = field("title", "Title", "text");
        title.required = Some(true);
        let converted = generator().convert("Post", &doc_with(vec![title])).unwrap();
        assert!(converted.main[0].ends_with("title: string"));
    }

    #[test]
    fn hyphenated_field_id_is_quoted() {
        let converted = generator()
            .convert(
                "Post",
                &doc_with(vec![field("cover-image", "Cover image", "media")]),
            )
            .unwrap();
        assert!(converted.main[0].ends_with("\"cover-image\"?: CmsImage"));
    }

    #[test]
    fn custom_reference_resolves_to_the_block_type_name() {
        let mut author = field("author", "Author", "custom");
        author.custom_field_created_at = Some("2022-01-01T00:00:00.000Z".into());
        let doc = SchemaDocument {
            api_fields: vec![author],
            custom_fields: vec![block("2022-01-01T00:00:00.000Z", "author", vec![])],
        };
        let converted = generator().convert("Post", &doc).unwrap();
        assert!(converted.main[0].ends_with("author?: PostCustomFieldAuthor"));
    }

    #[test]
    fn unresolved_custom_reference_is_fatal() {
        let mut author = field("author", "Author", "custom");
        author.custom_field_created_at = Some("2099-01-01T00:00:00.000Z".into());
        let doc = SchemaDocument {
            api_fields: vec![author],
            custom_fields: vec![],
        };
        let err = generator().convert("Post", &doc).unwrap_err();
        let GenerateError::UnresolvedReference {
            schema,
            field_id,
            created_at,
        } = err;
        assert_eq!(schema, "Post");
        assert_eq!(field_id, "author");
        assert_eq!(created_at, "2099-01-01T00:00:00.000Z");
    }

    #[test]
    fn repeater_unions_its_block_types() {
        let mut sections = field("sections", "Sections", "repeater");
        sections.custom_field_created_at_list = Some(vec!["c1".into(), "c2".into()]);
        let doc = SchemaDocument {
            api_fields: vec![sections],
            custom_fields: vec![
                block("c1", "quote", vec![]),
                block("c2", "rich-text", vec![]),
            ],
        };
        let converted = generator().convert("Post", &doc).unwrap();
        assert!(converted.main[0]
            .ends_with("sections?: (PostCustomFieldQuote | PostCustomFieldRichText)[]"));
    }

    #[test]
    fn repeater_with_one_block_skips_the_parentheses() {
        let mut sections = field("sections", "Sections", "repeater");
        sections.custom_field_created_at_list = Some(vec!["c1".into()]);
        let doc = SchemaDocument {
            api_fields: vec![sections],
            custom_fields: vec![block("c1", "quote", vec![])],
        };
        let converted = generator().convert("Post", &doc).unwrap();
        assert!(converted.main[0].ends_with("sections?: PostCustomFieldQuote[]"));
    }

    #[test]
    fn repeater_with_a_dangling_key_is_fatal() {
        let mut sections = field("sections", "Sections", "repeater");
        sections.custom_field_created_at_list = Some(vec!["c1".into(), "gone".into()]);
        let doc = SchemaDocument {
            api_fields: vec![sections],
            custom_fields: vec![block("c1", "quote", vec![])],
        };
        let err = generator().convert("Post", &doc).unwrap_err();
        let GenerateError::UnresolvedReference { created_at, .. } = err;
        assert_eq!(created_at, "gone");
    }

    #[test]
    fn render_produces_one_type_per_block() {
        let mut title = field("title", "Title", "text");
        title.required = Some(true);
        let doc = SchemaDocument {
            api_fields: vec![title],
            custom_fields: vec![block(
                "c1",
                "author",
                vec![field("name", "Name", "text")],
            )],
        };
        let generator = generator();
        let converted = generator.convert("Post", &doc).unwrap();
        let output = generator.render("Post", &converted);
        let expected = "export type Post = {\n  \
            /**\n   * Title\n   */\n  title: string\n}\n\n\
            export type PostCustomFieldAuthor = {\n  \
            /**\n   * fieldId\n   */\n  fieldId: 'author'\n  \
            /**\n   * Name\n   */\n  name?: string\n}\n\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn generate_imports_only_what_the_schema_uses() {
        let generator = generator();

        let relations = generator
            .generate(
                "Post",
                &doc_with(vec![field("related", "Related", "relationList")]),
            )
            .unwrap();
        assert!(relations.starts_with("import { CmsRelation } from './cms-schema';\n\n"));

        let both = generator
            .generate(
                "Post",
                &doc_with(vec![
                    field("related", "Related", "relation"),
                    field("cover", "Cover", "media"),
                ]),
            )
            .unwrap();
        assert!(both.starts_with("import { CmsRelation, CmsImage } from './cms-schema';\n\n"));

        let plain = generator
            .generate("Post", &doc_with(vec![field("title", "Title", "text")]))
            .unwrap();
        assert!(plain.starts_with("export type Post = {"));
    }

    #[test]
    fn shared_types_declare_the_three_reference_shapes() {
        assert!(SHARED_TYPES.contains("type CmsContentId"));
        assert!(SHARED_TYPES.contains("type CmsDate"));
        assert!(SHARED_TYPES.contains("export type CmsImage"));
        assert!(SHARED_TYPES.contains("export type CmsRelation<T>"));
    }

    #[test]
    fn pascal_case_handles_kebab_and_camel_input() {
        assert_eq!(pascal_case("rich-text"), "RichText");
        assert_eq!(pascal_case("richEditor"), "RichEditor");
        assert_eq!(pascal_case("html"), "Html");
    }
}
