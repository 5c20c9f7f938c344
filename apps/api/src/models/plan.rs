use serde::Serialize;

/// One labelled section of a partitioned model response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSection {
    pub label: String,
    /// Raw lines that followed the header, each terminated by `\n`. Empty when the
    /// header never appeared.
    pub body: String,
}

/// Ordered label → body mapping produced by the response partitioner.
///
/// Holds exactly one section per requested label, in the order the labels were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuredPlan {
    pub sections: Vec<PlanSection>,
    /// Text seen before the first header. Only populated when the partitioner runs
    /// with `PreambleMode::Keep`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
}

impl StructuredPlan {
    #[cfg(test)]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.body.as_str())
    }

    #[cfg(test)]
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.label.as_str())
    }

    /// Number of sections with a non-empty body.
    pub fn filled_count(&self) -> usize {
        self.sections.iter().filter(|s| !s.body.is_empty()).count()
    }
}
