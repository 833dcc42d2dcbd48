use crate::diameter::DiameterMethod;

/// Knobs for [`crate::output::Report::analyze`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AnalysisOptions {
    /// How component diameters are computed. Defaults to [`DiameterMethod::TwoPass`].
    pub diameter: DiameterMethod,
}

impl AnalysisOptions {
    pub fn with_diameter(mut self, method: DiameterMethod) -> Self {
        self.diameter = method;
        self
    }
}
