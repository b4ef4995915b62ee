// Text feature extraction — the transforms that turn raw text into the
// streams the feature model counts.
//
// Each submodule is a pure function over strings. The transforms are
// character-exact: downstream similarity scores are defined relative to
// precisely these cleanups, so none of them should be "improved" without
// rebuilding every persisted model.

pub mod ngrams;
pub mod sentences;
pub mod stem;
pub mod tokenize;

pub use ngrams::char_ngrams;
pub use sentences::sentence_lengths;
pub use stem::stem;
pub use tokenize::clean_text;
