use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use discipline_core_api::domain::SignerRole;

use crate::models::identifiable::Identifiable;

/// Database model for one party's sign-off on a corrective action.
///
/// Immutable once written. At most one row exists per
/// (corrective_action_id, signer_role, signer_person_id); the store enforces
/// this with a unique index so concurrent signers race safely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionSignatureModel {
    pub id: Uuid,

    pub corrective_action_id: Uuid,

    pub signer_role: SignerRole,

    pub signer_person_id: Uuid,

    /// Base64 image data URL from the capture device; vetted before insert.
    pub signature_image: String,

    /// Capture origin address, when the web layer supplies one.
    pub source_ip: Option<HeaplessString<45>>,

    /// Capture device string, when supplied.
    pub device: Option<HeaplessString<255>>,

    pub signed_at: DateTime<Utc>,
}

impl Identifiable for ActionSignatureModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}
