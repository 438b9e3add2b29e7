//! Repository for the `profiles` table.

use sqlx::PgPool;

use compass_core::types::DbId;

use crate::models::profile::{Profile, UpdateProfile};

/// Column list for `profiles` queries.
const COLUMNS: &str =
    "id, user_id, display_name, headline, focus_areas_json, created_at, updated_at";

/// Provides CRUD operations for user profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Get the profile for a user, creating an empty one if it does not
    /// exist yet.
    ///
    /// Uses a no-op `DO UPDATE` to guarantee `RETURNING` always produces
    /// a row.
    pub async fn get_or_create(pool: &PgPool, user_id: DbId) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (user_id) \
             VALUES ($1) \
             ON CONFLICT (user_id) DO UPDATE SET user_id = profiles.user_id \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Partial update of a user's profile.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Profile, sqlx::Error> {
        let mut set_clauses: Vec<String> = Vec::new();
        let mut param_idx: usize = 2; // $1 is user_id

        if input.display_name.is_some() {
            set_clauses.push(format!("display_name = ${param_idx}"));
            param_idx += 1;
        }
        if input.headline.is_some() {
            set_clauses.push(format!("headline = ${param_idx}"));
            param_idx += 1;
        }
        if input.focus_areas_json.is_some() {
            set_clauses.push(format!("focus_areas_json = ${param_idx}"));
        }

        if set_clauses.is_empty() {
            let select = format!("SELECT {COLUMNS} FROM profiles WHERE user_id = $1");
            return sqlx::query_as::<_, Profile>(&select)
                .bind(user_id)
                .fetch_one(pool)
                .await;
        }

        set_clauses.push("updated_at = NOW()".to_string());
        let query = format!(
            "UPDATE profiles SET {} WHERE user_id = $1 RETURNING {COLUMNS}",
            set_clauses.join(", ")
        );

        let mut q = sqlx::query_as::<_, Profile>(&query).bind(user_id);

        if let Some(ref display_name) = input.display_name {
            q = q.bind(display_name);
        }
        if let Some(ref headline) = input.headline {
            q = q.bind(headline);
        }
        if let Some(ref focus_areas) = input.focus_areas_json {
            q = q.bind(serde_json::to_value(focus_areas).unwrap_or_default());
        }

        q.fetch_one(pool).await
    }
}
