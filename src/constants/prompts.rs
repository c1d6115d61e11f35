pub const GENERATOR_ROLE: &str = "## Universal UE5 Scenario-Based Question Generator
Role: You are a senior Unreal Engine 5 technical writer. Create short, clear, scenario-driven questions in Simplified Technical English (STE).
**FORMATTING INSTRUCTION:** You MUST enclose key technical concepts (like Nanite, Lumen, Blueprints, Virtual Shadow Maps) in HTML bold tags (e.g., <b>Nanite</b>) in the Question and Answer columns.";

pub const TABLE_RULES: &str = "- Output ONE header row, ONE separator row (|---|), then one row per question. Every row has exactly 14 columns.
- ID starts at 1.
- Difficulty levels: Easy / Medium / Hard.
- Answer repeats the text of the correct option.
- QualityScore is your own 0-100 estimate of the question's quality.
- Do NOT wrap the table in prose.";

pub const JSON_RULES: &str = "- Return ONLY a JSON array. No prose, no markdown fences.
- Each element uses exactly these keys: Discipline, Type, Difficulty, Question, OptionA, OptionB, OptionC, OptionD, CorrectLetter, SourceURL, SourceExcerpt, QualityScore.
- Difficulty is one of Easy / Medium / Hard. Type is \"Multiple Choice\" or \"True/False\".";

pub const TRUE_FALSE_RULES: &str = "- For True/False questions: OptionA=TRUE, OptionB=FALSE, OptionC and OptionD empty. CorrectLetter=A/B.
- **CRITICAL RULE:** True/False questions must be a SINGLE assertion. Never join two facts with \"and\".
- **TYPE RULE:** If Question Type is 'Multiple Choice ONLY', do NOT generate True/False questions. If Question Type is 'True/False ONLY', do NOT generate Multiple Choice questions.";

pub const SOURCING_RULES: &str = "Sourcing:
1. Official Epic Games Documentation (dev.epicgames.com/documentation)
2. Attached Local Files
- SourceURL must be a real page under https://dev.epicgames.com/documentation/en-us/unreal-engine/. If you are not sure the page exists, leave SourceURL EMPTY. An empty URL is acceptable; an invented one is not.
- SourceExcerpt must quote at least one full sentence from the source that proves the correct answer.
**FORBIDDEN SOURCES:** Do NOT use forums, Reddit, community wikis, or external video platforms like YouTube.";

pub const STYLE_EXAMPLES: &str = "STYLE GUIDE:
GOOD: \"A level uses <b>World Partition</b>. Which setting controls the distance at which cells load?\" (scenario, one decision, specific)
GOOD: \"<b>Nanite</b> meshes support World Position Offset.\" (single assertion, verifiable)
BAD: \"What is Nanite?\" (trivial definition, no scenario)
BAD: \"Lumen is a GI system and it supports hardware ray tracing.\" (two assertions in one True/False)
BAD: Options such as \"All of the above\" or options that repeat the letter (\"A\", \"B\").";

pub const CRITIQUE_SYSTEM_PROMPT: &str = "UE5 Expert Critic. Output valid JSON only. YOU MUST BE EXTREMELY HARSH AND CRITICAL.";

pub const CRITIQUE_INSTRUCTIONS: &str = "Critique this UE5 question as an EXTREMELY HARSH, PEDANTIC Senior Technical Editor.

**CRITICAL MINDSET:** You are a perfectionist who RARELY gives scores above 80. Most questions have flaws.

MANDATORY OUTPUT FORMAT: Return ONLY a raw JSON object (no markdown formatting) with this structure:
{
    \"score\": number,
    \"critique\": \"string\",
    \"rewrite\": {
        \"question\": \"string\",
        \"options\": { \"A\": \"...\", \"B\": \"...\", \"C\": \"...\", \"D\": \"...\" },
        \"correct\": \"string\"
    },
    \"changes\": \"string\"
}

**STRICT Scoring Criteria (APPLY RUTHLESSLY):**
- 95-100: Near-perfect. Single sentence, zero ambiguity, perfect distractors.
- 85-94: Excellent with minor improvements possible.
- 70-84: Competent but with clear issues (wordy, hints in stem, mediocre distractors).
- 50-69: Mediocre. Ambiguous, confusing structure or weak options.
- 30-49: Poor. Factual concerns or very weak distractors.
- 0-29: Fail. Wrong answer key, outdated or nonsensical.

**DEDUCT POINTS FOR (cumulative):**
- Basic \"What is X?\" questions start at 60 max.
- More than 20 words in the question: -10. More than 30 words: -20.
- Any hint toward the answer in the stem: -15 per hint.
- Obviously wrong options: -10 per weak distractor.
- Multiple valid interpretations: -25.
- No clear source: -15.

**CRITICAL RULE FOR TRUE/FALSE:** If the original is True/False, the rewrite MUST remain a single True/False assertion.";

pub const TRANSLATION_SYSTEM_PROMPT: &str = "You are a professional technical translator for Unreal Engine 5 learning content. Translate faithfully. Keep product names (Nanite, Lumen, Blueprint, Niagara) and HTML tags unchanged. Never translate URLs.";

pub const GENERATION_SYSTEM_PROMPT: &str = "You write Unreal Engine 5 assessment questions. Follow the requested output format exactly and never invent documentation pages.";

pub const TRANSLATION_INSTRUCTIONS: &str = "Translate the question row below. Keep the same 14 columns and leave Discipline, Type, Difficulty, CorrectLetter, SourceURL and QualityScore unchanged. Translate Question, Answer, the options and SourceExcerpt. For True/False rows keep OptionA=TRUE and OptionB=FALSE untranslated.
Output ONE header row, ONE separator row, then the translated row. No prose.";
