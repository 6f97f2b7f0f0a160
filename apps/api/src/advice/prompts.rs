// Prompt constants for advice generation.

pub const ADVICE_SYSTEM: &str = "You are an experienced university admissions counselor. \
    Give practical, encouraging, specific guidance in plain prose. \
    Keep the answer short enough to read in a minute.";

/// Replace: {interests}, {strengths}, {preferences}, {programs}
pub const ADVICE_PROMPT_TEMPLATE: &str = "The student has these interests: {interests}
Strengths: {strengths}
Preferences: {preferences}

Based on this, provide advice and recommend how they should approach their applications.
Consider the following programs:
{programs}";

pub const NO_PROGRAMS_LINE: &str = "No matched programs";
