use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};
use tracing::{debug, info, warn};

use models::company::{self, Entity as CompanyEntity};
use models::{CompanyDraft, CompanyPatch};

use crate::errors::ServiceError;

/// Insert a validated draft. A duplicate ISIN comes back as `Conflict`.
pub async fn create_company(db: &DatabaseConnection, draft: CompanyDraft) -> Result<company::Model, ServiceError> {
    let isin_no = draft.isin_no.clone();
    match draft.into_active_model().insert(db).await {
        Ok(m) => {
            info!(company_id = m.id, isin_no = %m.isin_no, "company created");
            Ok(m)
        }
        Err(e) => {
            let err = ServiceError::from(e);
            if matches!(err, ServiceError::Conflict(_)) {
                warn!(isin_no = %isin_no, "duplicate isin rejected");
            }
            Err(err)
        }
    }
}

/// Get a company by id.
pub async fn get_company(db: &DatabaseConnection, id: i32) -> Result<Option<company::Model>, ServiceError> {
    let found = CompanyEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Companies whose ISIN or name contains `search`, newest first.
/// An absent or empty search returns every row in the same order.
pub async fn list_companies(db: &DatabaseConnection, search: Option<&str>) -> Result<Vec<company::Model>, ServiceError> {
    let mut finder = CompanyEntity::find();
    if let Some(s) = search.filter(|s| !s.is_empty()) {
        finder = finder.filter(
            Condition::any()
                .add(company::Column::IsinNo.contains(s))
                .add(company::Column::CompanyName.contains(s)),
        );
    }
    // id breaks ties between rows stamped within the same clock tick
    let rows = finder
        .order_by_desc(company::Column::CreatedAt)
        .order_by_desc(company::Column::Id)
        .all(db)
        .await?;
    debug!(search = ?search, count = rows.len(), "companies listed");
    Ok(rows)
}

/// Apply a patch inside one transaction. `Ok(None)` when the id does not exist.
pub async fn update_company(
    db: &DatabaseConnection,
    id: i32,
    patch: CompanyPatch,
) -> Result<Option<company::Model>, ServiceError> {
    let txn = db.begin().await?;
    let Some(existing) = CompanyEntity::find_by_id(id).one(&txn).await? else {
        return Ok(None);
    };
    if patch.is_empty() {
        txn.commit().await?;
        return Ok(Some(existing));
    }
    let mut am: company::ActiveModel = existing.into();
    patch.apply(&mut am);
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    info!(company_id = updated.id, "company updated");
    Ok(Some(updated))
}

/// Delete a company; returns true if it existed.
pub async fn delete_company(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let txn = db.begin().await?;
    let Some(existing) = CompanyEntity::find_by_id(id).one(&txn).await? else {
        return Ok(false);
    };
    existing.delete(&txn).await?;
    txn.commit().await?;
    info!(company_id = id, "company deleted");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::FieldPatch;
    use sea_orm::PaginatorTrait;

    fn draft(name: &str, isin: &str) -> CompanyDraft {
        CompanyDraft {
            company_name: name.into(),
            isin_no: isin.into(),
            paid_up_capital: None,
            face_value: None,
            no_of_shares: None,
            shareholders_demat: None,
            shareholders_physical: None,
            contact_person: None,
            designation: None,
            company_address: None,
            cin: None,
            contact_no: None,
            email: None,
            gstin: None,
            company_type: None,
            listing_status: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_company(&db, draft("Acme Ltd", "US0003201000")).await?;
        let b = create_company(&db, draft("Beta Corp", "INE000000001")).await?;
        assert_ne!(a.id, b.id);
        assert_eq!(a.isin_no, "US0003201000");
        assert!(a.email.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_isin_conflicts_and_keeps_one_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_company(&db, draft("Acme Ltd", "US0003201000")).await?;
        let err = create_company(&db, draft("Acme Copy", "US0003201000")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");

        let n = CompanyEntity::find()
            .filter(company::Column::IsinNo.eq("US0003201000"))
            .count(&db)
            .await?;
        assert_eq!(n, 1);
        Ok(())
    }

    #[tokio::test]
    async fn missing_ids_are_reported() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert!(get_company(&db, 404).await?.is_none());
        assert!(update_company(&db, 404, CompanyPatch::default()).await?.is_none());
        assert!(!delete_company(&db, 404).await?);
        Ok(())
    }

    #[tokio::test]
    async fn update_changes_only_patched_field() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut d = draft("Acme Ltd", "US0003201000");
        d.email = Some("ir@acme.com".into());
        let before = create_company(&db, d).await?;

        let patch = CompanyPatch { designation: FieldPatch::Set(Some("CFO".into())), ..Default::default() };
        let after = update_company(&db, before.id, patch).await?.expect("row exists");

        assert_eq!(after.designation.as_deref(), Some("CFO"));
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.email, before.email);
        assert_eq!(after.company_name, before.company_name);
        assert_eq!(after.isin_no, before.isin_no);
        Ok(())
    }

    #[tokio::test]
    async fn update_to_taken_isin_conflicts() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        create_company(&db, draft("Acme Ltd", "US0003201000")).await?;
        let other = create_company(&db, draft("Beta Corp", "INE000000001")).await?;

        let patch = CompanyPatch { isin_no: FieldPatch::Set("US0003201000".into()), ..Default::default() };
        let err = update_company(&db, other.id, patch).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "got {err:?}");

        let still = get_company(&db, other.id).await?.expect("row exists");
        assert_eq!(still.isin_no, "INE000000001");
        Ok(())
    }

    #[tokio::test]
    async fn delete_then_get_is_none() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_company(&db, draft("Acme Ltd", "US0003201000")).await?;
        assert!(delete_company(&db, a.id).await?);
        assert!(get_company(&db, a.id).await?.is_none());
        assert!(!delete_company(&db, a.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn list_filters_on_isin_or_name_newest_first() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let a = create_company(&db, draft("ABC Holdings", "INE111111111")).await?;
        let b = create_company(&db, draft("Zeta Ltd", "USABC0000001")).await?;
        let c = create_company(&db, draft("Other Co", "GB0000000009")).await?;

        let hits = list_companies(&db, Some("ABC")).await?;
        let ids: Vec<i32> = hits.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);

        let all = list_companies(&db, None).await?;
        let ids: Vec<i32> = all.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![c.id, b.id, a.id]);

        let empty_search = list_companies(&db, Some("")).await?;
        assert_eq!(empty_search.len(), 3);
        Ok(())
    }
}
