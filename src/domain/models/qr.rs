use serde::{Deserialize, Serialize};
use chrono::NaiveTime;

/// The data bundle a scanning device encodes for a participant against the
/// active event. Opaque to the ledger; the scan flow hands back the
/// participant/event ids verbatim.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QrPayload {
    pub participant_id: String,
    pub id_number: String,
    pub event_id: String,
    pub name: String,
    pub group_name: Option<String>,
    pub event_name: String,
    pub check_in_time: NaiveTime,
    pub check_out_time: NaiveTime,
}
