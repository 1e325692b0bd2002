use crate::BatchRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch and extract every URL of the batch, in order, then report back
    /// with `Msg::ReportReady`.
    RunBatch(BatchRequest),
}
