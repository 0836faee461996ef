use std::error::Error;

use discipline_core_api::domain::CorrectiveActionStatus;
use discipline_core_api::error::DomainError;
use discipline_core_db::models::discipline::{ActionSignatureModel, CorrectiveActionModel};

use crate::utils::is_unique_violation;

use super::repo_impl::ActionSignatureRepositoryImpl;

impl ActionSignatureRepositoryImpl {
    /// Insert a signature and, when present, the parent action's
    /// status/comments update in one transaction.
    ///
    /// Two races resolve here: a (action, role, signer) collision trips the
    /// unique index and comes back as `DuplicateSignature`; a void that
    /// committed since the caller loaded the action defeats the insert guard
    /// (and, for employee signatures, the guarded parent update) and comes
    /// back as `InvalidState`.
    pub(super) async fn record_impl(
        repo: &ActionSignatureRepositoryImpl,
        signature: ActionSignatureModel,
        parent_update: Option<CorrectiveActionModel>,
    ) -> Result<ActionSignatureModel, Box<dyn Error + Send + Sync>> {
        let mut tx = repo.pool.begin().await?;

        // The insert itself re-checks that the action is still live, so a
        // signature in any role loses a race against a void.
        let inserted = sqlx::query(
            r#"
            INSERT INTO corrective_action_signature (
                id, corrective_action_id, signer_role, signer_person_id,
                signature_image, source_ip, device, signed_at
            )
            SELECT $1, $2, $3, $4, $5, $6, $7, $8
            WHERE EXISTS (
                SELECT 1 FROM corrective_action
                WHERE id = $2 AND status <> $9
            )
            "#,
        )
        .bind(signature.id)
        .bind(signature.corrective_action_id)
        .bind(signature.signer_role)
        .bind(signature.signer_person_id)
        .bind(&signature.signature_image)
        .bind(signature.source_ip.as_ref().map(|s| s.as_str()))
        .bind(signature.device.as_ref().map(|d| d.as_str()))
        .bind(signature.signed_at)
        .bind(CorrectiveActionStatus::Voided)
        .execute(&mut *tx)
        .await;

        let inserted = match inserted {
            Ok(result) => result,
            Err(err) => {
                if is_unique_violation(&err, "uq_signature_action_role_signer") {
                    return Err(Box::new(DomainError::DuplicateSignature(format!(
                        "{} already signed corrective action {} as {}",
                        signature.signer_person_id,
                        signature.corrective_action_id,
                        signature.signer_role
                    ))));
                }
                return Err(err.into());
            }
        };

        if inserted.rows_affected() == 0 {
            return Err(Box::new(DomainError::InvalidState(format!(
                "corrective action {} is voided",
                signature.corrective_action_id
            ))));
        }

        if let Some(parent) = parent_update {
            let updated = sqlx::query(
                r#"
                UPDATE corrective_action
                SET status = $2, employee_comments = $3
                WHERE id = $1 AND status <> $4
                "#,
            )
            .bind(parent.id)
            .bind(parent.status)
            .bind(parent.employee_comments.as_ref().map(|c| c.as_str()))
            .bind(CorrectiveActionStatus::Voided)
            .execute(&mut *tx)
            .await?;

            if updated.rows_affected() == 0 {
                return Err(Box::new(DomainError::InvalidState(format!(
                    "corrective action {} is voided",
                    parent.id
                ))));
            }
        }

        tx.commit().await?;
        tracing::debug!(
            signature_id = %signature.id,
            action_id = %signature.corrective_action_id,
            "signature row committed"
        );
        Ok(signature)
    }
}

#[cfg(test)]
mod tests {
    use discipline_core_api::domain::{CorrectiveActionStatus, SignerRole};
    use discipline_core_api::error::DomainError;
    use discipline_core_db::repository::{
        ActionSignatureRepository, CorrectiveActionRepository, CreateBatch, Load,
    };
    use serial_test::serial;

    use crate::test_helper::setup_test_context;

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance"]
    async fn test_employee_signature_updates_parent(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let employee_id = ctx.seed_employee().await?;
        let category = ctx.seed_category(4).await?;

        let action = ctx.new_test_action(employee_id, category.id, 4);
        ctx.repos.actions.create_batch(vec![action.clone()]).await?;

        let mut acknowledged = action.clone();
        acknowledged.status = CorrectiveActionStatus::Acknowledged;
        let signature = ctx.new_test_signature(action.id, SignerRole::Employee, employee_id);
        ctx.repos
            .signatures
            .record(signature, Some(acknowledged))
            .await?;

        let reloaded = ctx
            .repos
            .actions
            .load(action.id)
            .await?
            .expect("action should exist");
        assert_eq!(reloaded.status, CorrectiveActionStatus::Acknowledged);

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance"]
    async fn test_insert_is_refused_once_the_action_is_voided(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let employee_id = ctx.seed_employee().await?;
        let category = ctx.seed_category(4).await?;

        let action = ctx.new_test_action(employee_id, category.id, 4);
        ctx.repos.actions.create_batch(vec![action.clone()]).await?;
        ctx.repos
            .actions
            .void(action.id, "Filed in error", uuid::Uuid::new_v4(), chrono::Utc::now())
            .await?;

        // No parent update on a witness signature; the insert guard alone
        // must refuse the row.
        let late = ctx.new_test_signature(action.id, SignerRole::Witness, uuid::Uuid::new_v4());
        let err = ctx
            .repos
            .signatures
            .record(late, None)
            .await
            .expect_err("signing a voided action must fail");
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::InvalidState(_))
        ));

        Ok(())
    }

    #[tokio::test]
    #[serial]
    #[ignore = "requires a PostgreSQL instance"]
    async fn test_duplicate_triple_trips_the_unique_index(
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let ctx = setup_test_context().await?;
        let employee_id = ctx.seed_employee().await?;
        let category = ctx.seed_category(4).await?;

        let action = ctx.new_test_action(employee_id, category.id, 4);
        ctx.repos.actions.create_batch(vec![action.clone()]).await?;

        let supervisor = uuid::Uuid::new_v4();
        let first = ctx.new_test_signature(action.id, SignerRole::Supervisor, supervisor);
        ctx.repos.signatures.record(first, None).await?;

        let second = ctx.new_test_signature(action.id, SignerRole::Supervisor, supervisor);
        let err = ctx
            .repos
            .signatures
            .record(second, None)
            .await
            .expect_err("duplicate must fail");
        assert!(matches!(
            err.downcast_ref::<DomainError>(),
            Some(DomainError::DuplicateSignature(_))
        ));

        Ok(())
    }
}
