use std::error::Error;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use discipline_core_api::domain::SignerRole;
use discipline_core_db::models::discipline::{ActionSignatureModel, CorrectiveActionModel};
use discipline_core_db::repository::ActionSignatureRepository;

use crate::utils::{get_optional_heapless_string, TryFromRow};

pub(super) const COLUMNS: &str = "id, corrective_action_id, signer_role, signer_person_id, \
     signature_image, source_ip, device, signed_at";

pub struct ActionSignatureRepositoryImpl {
    pub(crate) pool: Arc<PgPool>,
}

impl ActionSignatureRepositoryImpl {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

impl TryFromRow<PgRow> for ActionSignatureModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Ok(ActionSignatureModel {
            id: row.try_get("id")?,
            corrective_action_id: row.try_get("corrective_action_id")?,
            signer_role: row.try_get("signer_role")?,
            signer_person_id: row.try_get("signer_person_id")?,
            signature_image: row.try_get("signature_image")?,
            source_ip: get_optional_heapless_string(row, "source_ip")?,
            device: get_optional_heapless_string(row, "device")?,
            signed_at: row.try_get("signed_at")?,
        })
    }
}

#[async_trait]
impl ActionSignatureRepository for ActionSignatureRepositoryImpl {
    async fn record(
        &self,
        signature: ActionSignatureModel,
        parent_update: Option<CorrectiveActionModel>,
    ) -> Result<ActionSignatureModel, Box<dyn Error + Send + Sync>> {
        Self::record_impl(self, signature, parent_update).await
    }

    async fn find_by_action(
        &self,
        action_id: Uuid,
    ) -> Result<Vec<ActionSignatureModel>, Box<dyn Error + Send + Sync>> {
        Self::find_by_action_impl(self, action_id).await
    }

    async fn exists(
        &self,
        action_id: Uuid,
        signer_role: SignerRole,
        signer_person_id: Uuid,
    ) -> Result<bool, Box<dyn Error + Send + Sync>> {
        Self::exists_impl(self, action_id, signer_role, signer_person_id).await
    }
}
