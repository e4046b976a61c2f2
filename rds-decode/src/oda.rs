use rds_model::{Blocks, GroupType, RdsData};

/// A host-supplied handler for Open Data Applications. Group-type slots
/// bound by a 3A announcement are routed here instead of to the default
/// per-group decoder.
///
/// This stands in for what the underlying protocol's reference
/// implementation expresses as a pair of C function pointers plus an opaque
/// `user_data` blob: a trait object gives the same dynamic dispatch with no
/// unsafe pointer bookkeeping and lets the handler carry its own state.
pub trait OdaHandler {
    /// Called for each group whose type is currently bound to `app_id`.
    fn decode(&mut self, app_id: u16, rds: &RdsData, blocks: &Blocks, group_type: GroupType);

    /// Called once, after the state record has been reset.
    fn clear(&mut self) {}
}
