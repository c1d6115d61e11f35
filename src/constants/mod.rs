pub mod documentation_slugs;
pub mod prompts;
pub mod tag_taxonomy;

pub const DOCS_BASE_URL: &str = "https://dev.epicgames.com/documentation/en-us/unreal-engine/";
pub const DOCS_SLUG_SUFFIX: &str = "-in-unreal-engine";

/// Topics whose documentation pages conventionally end in [`DOCS_SLUG_SUFFIX`].
pub const SUFFIX_TOPIC_KEYWORDS: &[&str] = &[
    "nanite",
    "lumen",
    "niagara",
    "chaos",
    "blueprint",
    "landscape",
    "material",
    "animation",
    "skeletal",
    "world-partition",
    "virtual-shadow",
    "sequencer",
    "umg",
    "gameplay",
];

/// Function words ignored when extracting key terms from an answer.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "shall",
    "can", "need", "dare", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as",
    "into", "through", "during", "before", "after", "above", "below", "between", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "each", "few", "more", "most", "other", "some", "such", "no", "not", "only", "own", "same",
    "so", "than", "too", "very", "just", "and", "but", "or", "because", "until", "while",
    "although", "this", "that", "these", "those", "used", "use", "using", "uses", "which",
    "what", "it", "its",
];
