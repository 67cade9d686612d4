/// The id of the element displaying smoke test responses.
pub const OUTPUT_ELEMENT_ID: &str = "output";

pub trait OutputView: Clone + Send + Sync + 'static {
    fn set_output(&self, text: &str);

    fn output(&self) -> String;
}
