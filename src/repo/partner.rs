use sqlx::{PgPool, Postgres, Transaction};

use crate::dto::partner::CreatePartnerRequest;
use crate::models::{Partner, PartnerSourceLink};

pub async fn list(pool: &PgPool) -> Result<Vec<Partner>, sqlx::Error> {
    sqlx::query_as::<_, Partner>("SELECT * FROM partners ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn by_streetcode(
    pool: &PgPool,
    streetcode_id: i32,
) -> Result<Vec<Partner>, sqlx::Error> {
    // Partners marked visible-everywhere show on every streetcode page.
    sqlx::query_as::<_, Partner>(
        "SELECT DISTINCT p.* FROM partners p
         LEFT JOIN streetcode_partners sp ON sp.partner_id = p.id
         WHERE sp.streetcode_id = $1 OR p.is_visible_everywhere
         ORDER BY p.id",
    )
    .bind(streetcode_id)
    .fetch_all(pool)
    .await
}

pub async fn links_for(pool: &PgPool, partner_id: i32) -> Result<Vec<PartnerSourceLink>, sqlx::Error> {
    sqlx::query_as::<_, PartnerSourceLink>(
        "SELECT * FROM partner_source_links WHERE partner_id = $1 ORDER BY id",
    )
    .bind(partner_id)
    .fetch_all(pool)
    .await
}

pub async fn streetcode_ids_for(pool: &PgPool, partner_id: i32) -> Result<Vec<i32>, sqlx::Error> {
    let rows: Vec<(i32,)> = sqlx::query_as(
        "SELECT streetcode_id FROM streetcode_partners WHERE partner_id = $1 ORDER BY streetcode_id",
    )
    .bind(partner_id)
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(|(id,)| id).collect())
}

/// Creates the partner with its source links, linking only streetcode ids
/// that actually exist.
pub async fn insert(
    pool: &PgPool,
    req: &CreatePartnerRequest,
) -> Result<(Partner, Vec<PartnerSourceLink>, Vec<i32>), sqlx::Error> {
    let mut tx = pool.begin().await?;

    let partner = sqlx::query_as::<_, Partner>(
        "INSERT INTO partners
             (title, logo_id, is_key_partner, is_visible_everywhere, target_url, url_title, description)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(&req.title)
    .bind(req.logo_id)
    .bind(req.is_key_partner)
    .bind(req.is_visible_everywhere)
    .bind(&req.target_url)
    .bind(&req.url_title)
    .bind(&req.description)
    .fetch_one(&mut *tx)
    .await?;

    let links = write_links(&mut tx, partner.id, req).await?;
    let linked = write_streetcode_links(&mut tx, partner.id, &req.streetcode_ids).await?;

    tx.commit().await?;
    Ok((partner, links, linked))
}

/// Full update: scalar fields are overwritten, source links and streetcode
/// links are replaced wholesale.
pub async fn update(
    pool: &PgPool,
    id: i32,
    req: &CreatePartnerRequest,
) -> Result<Option<(Partner, Vec<PartnerSourceLink>, Vec<i32>)>, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let Some(partner) = sqlx::query_as::<_, Partner>(
        "UPDATE partners SET
             title = $2, logo_id = $3, is_key_partner = $4, is_visible_everywhere = $5,
             target_url = $6, url_title = $7, description = $8
         WHERE id = $1
         RETURNING *",
    )
    .bind(id)
    .bind(&req.title)
    .bind(req.logo_id)
    .bind(req.is_key_partner)
    .bind(req.is_visible_everywhere)
    .bind(&req.target_url)
    .bind(&req.url_title)
    .bind(&req.description)
    .fetch_optional(&mut *tx)
    .await?
    else {
        return Ok(None);
    };

    sqlx::query("DELETE FROM partner_source_links WHERE partner_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("DELETE FROM streetcode_partners WHERE partner_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let links = write_links(&mut tx, partner.id, req).await?;
    let linked = write_streetcode_links(&mut tx, partner.id, &req.streetcode_ids).await?;

    tx.commit().await?;
    Ok(Some((partner, links, linked)))
}

async fn write_links(
    tx: &mut Transaction<'_, Postgres>,
    partner_id: i32,
    req: &CreatePartnerRequest,
) -> Result<Vec<PartnerSourceLink>, sqlx::Error> {
    let mut links = Vec::with_capacity(req.source_links.len());
    for link in &req.source_links {
        let row = sqlx::query_as::<_, PartnerSourceLink>(
            "INSERT INTO partner_source_links (logo_type, target_url, partner_id)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(link.logo_type)
        .bind(&link.target_url)
        .bind(partner_id)
        .fetch_one(&mut **tx)
        .await?;
        links.push(row);
    }
    Ok(links)
}

async fn write_streetcode_links(
    tx: &mut Transaction<'_, Postgres>,
    partner_id: i32,
    streetcode_ids: &[i32],
) -> Result<Vec<i32>, sqlx::Error> {
    if streetcode_ids.is_empty() {
        return Ok(Vec::new());
    }

    // Silently skip ids that do not resolve to a streetcode.
    let existing: Vec<(i32,)> =
        sqlx::query_as("SELECT id FROM streetcodes WHERE id = ANY($1) ORDER BY id")
            .bind(streetcode_ids)
            .fetch_all(&mut **tx)
            .await?;

    let mut linked = Vec::with_capacity(existing.len());
    for (streetcode_id,) in existing {
        sqlx::query(
            "INSERT INTO streetcode_partners (streetcode_id, partner_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(streetcode_id)
        .bind(partner_id)
        .execute(&mut **tx)
        .await?;
        linked.push(streetcode_id);
    }
    Ok(linked)
}
