/// Number of measured channels in one analysis run.
pub const VALUE_COUNT: usize = 9;

/// Fixed decimal precision used by the text rendering.
pub const RENDER_PRECISION: usize = 6;

/// Line labels of the text rendering.
pub mod labels {
    pub const VALUE: &str = "Value";
    pub const QC1_VAR: &str = "QC1 VAR";
    pub const QC2_VAR: &str = "QC2 VAR";
}
