// Shared prompt fragments. Each use case's template lives in coaching/prompts.rs;
// this file holds the pieces every template splices in.

/// Opening line for every coaching prompt.
pub const COACH_PERSONA: &str = "You are an experienced, certified sports coach \
    and performance specialist. Give practical, specific advice a real athlete can follow.";

/// Tells the model how to lay out headings so the response partitioner can find them.
pub const SECTION_FORMAT_INSTRUCTION: &str = "\
    Structure your answer using EXACTLY the numbered section headings below, \
    each on its own line and written exactly as shown. \
    Put the content for each section on the lines after its heading. \
    Do not add an introduction before the first heading.";

/// Appended to any template that touches injuries, pain or medical context.
pub const SAFETY_INSTRUCTION: &str = "\
    Be conservative: recommend consulting a qualified physician or physiotherapist \
    before starting, and flag any activity that should stop immediately if pain increases.";
