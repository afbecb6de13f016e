//! Keyword-Matched Canned Advice

/// Keyword → answer, checked in order; the first keyword found wins
const KEYWORD_RESPONSES: &[(&str, &str)] = &[
    (
        "budget",
        "When setting a budget for a car purchase, consider not just the sticker price, but also ongoing costs like insurance, maintenance, fuel, and depreciation. A good rule of thumb is that your total car expenses should be no more than 15-20% of your monthly income.",
    ),
    (
        "electric",
        "Electric vehicles offer lower running costs, zero emissions, and often better performance. However, they typically have higher upfront costs and require charging infrastructure. Consider your daily driving distance and charging options before making the switch.",
    ),
    (
        "depreciation",
        "Depreciation is the difference between what you paid for your car and what you can sell it for. Luxury cars tend to depreciate faster, while reliable mainstream brands like Toyota and Honda typically hold their value better.",
    ),
    (
        "maintenance",
        "Regular maintenance is crucial for your car's longevity. Follow the manufacturer's recommended service schedule, keep your tires properly inflated, and address small issues before they become major problems.",
    ),
];

const DEFAULT_RESPONSE: &str = "I'm your AI car advisor. I can help with questions about buying, selling, maintenance, models, or financing. Feel free to ask anything related to automobiles and I'll provide expert guidance.";

/// Answers from a fixed keyword table
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedResponder;

impl CannedResponder {
    pub fn new() -> Self {
        Self
    }

    /// Pick the answer for a free-text query
    pub fn respond(&self, query: &str) -> &'static str {
        let query = query.to_lowercase();
        KEYWORD_RESPONSES
            .iter()
            .find(|(keyword, _)| query.contains(keyword))
            .map(|(_, answer)| *answer)
            .unwrap_or(DEFAULT_RESPONSE)
    }

    /// The greeting used when no keyword matches
    pub fn default_response(&self) -> &'static str {
        DEFAULT_RESPONSE
    }
}
