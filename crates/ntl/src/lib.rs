pub mod extract;
pub mod format;
pub mod search;
pub mod template;
pub mod types;

mod templatize;

pub use extract::{EntityPolicy, ExtractOptions, PhraseRule, extract_phrases};
pub use search::{ResolutionMap, sanitize_index, search_args, search_dataset};
pub use template::{RenderError, Segment, Template, TemplateError, parse_template};
pub use templatize::{resolve_references, substitute, templatize, templatize_with};
pub use types::{Arguments, Coordinate, Dataset, DatasetError, Datum, LabelKind, RowIndex};
