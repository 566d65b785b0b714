use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::application::ports::{DocumentQuery, DocumentRepository, Filter};
use crate::domain::{Document, DocumentId};
use crate::error::AppResult;

/// Documents as JSONB rows of the `documents` table.
pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl PostgresDocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type Row = (Uuid, Json<Map<String, Value>>);

fn into_document((id, Json(body)): Row) -> Document {
    Document::from_parts(DocumentId::from_uuid(id), body)
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &Filter) {
    if !filter.is_empty() {
        builder
            .push(" AND body @> ")
            .push_bind(Json(filter.to_json_object()));
    }
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn find(&self, collection: &str, query: &DocumentQuery) -> AppResult<Vec<Document>> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT id, body FROM documents WHERE collection = ");
        builder.push_bind(collection.to_string());
        if let Some(id) = &query.id {
            builder.push(" AND id = ").push_bind(*id.as_uuid());
        }
        push_filter(&mut builder, &query.filter);

        builder.push(" ORDER BY ");
        if let Some(sort) = &query.sort {
            // Missing fields behave like null: first ascending, last descending.
            builder
                .push("body -> ")
                .push_bind(sort.field.clone())
                .push(if sort.descending {
                    " DESC NULLS LAST, "
                } else {
                    " ASC NULLS FIRST, "
                });
        }
        builder.push("seq ASC");
        if let Some(limit) = query.limit {
            builder
                .push(" LIMIT ")
                .push_bind(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let rows: Vec<Row> = builder.build_query_as().fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(into_document).collect())
    }

    async fn find_by_id(&self, collection: &str, id: &DocumentId) -> AppResult<Option<Document>> {
        let row: Option<Row> =
            sqlx::query_as("SELECT id, body FROM documents WHERE collection = $1 AND id = $2")
                .bind(collection)
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(into_document))
    }

    async fn find_one(&self, collection: &str, filter: &Filter) -> AppResult<Option<Document>> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT id, body FROM documents WHERE collection = ");
        builder.push_bind(collection.to_string());
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY seq ASC LIMIT 1");
        let row: Option<Row> = builder.build_query_as().fetch_optional(&self.pool).await?;
        Ok(row.map(into_document))
    }

    async fn insert(&self, collection: &str, document: &Document) -> AppResult<()> {
        sqlx::query("INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)")
            .bind(collection)
            .bind(document.id.as_uuid())
            .bind(Json(&document.fields))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn merge(
        &self,
        collection: &str,
        id: &DocumentId,
        patch: &Map<String, Value>,
    ) -> AppResult<Option<Document>> {
        let row: Option<Row> = sqlx::query_as(
            "UPDATE documents SET body = body || $3
             WHERE collection = $1 AND id = $2
             RETURNING id, body",
        )
        .bind(collection)
        .bind(id.as_uuid())
        .bind(Json(patch))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(into_document))
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_matching(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let mut builder = QueryBuilder::<Postgres>::new("DELETE FROM documents WHERE collection = ");
        builder.push_bind(collection.to_string());
        push_filter(&mut builder, filter);
        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn count(&self, collection: &str, filter: &Filter) -> AppResult<u64> {
        let mut builder =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*)::BIGINT FROM documents WHERE collection = ");
        builder.push_bind(collection.to_string());
        push_filter(&mut builder, filter);
        let (count,): (i64,) = builder.build_query_as().fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or_default())
    }
}
