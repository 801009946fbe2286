use tracing::{error, info};

use crate::clock::{iso8601_millis, Clock};
use crate::error::StoreError;
use crate::facts::{client::FactSource, fact_or_fallback};
use crate::profile::{
    dto::{ProfileResponse, PublicProfile},
    repo::ProfileStore,
    repo_types::{ProfileFields, ProfileRecord},
};
use crate::state::AppState;

/// First stored profile, creating the placeholder row when the store is empty.
pub async fn load_or_create(store: &dyn ProfileStore) -> Result<ProfileRecord, StoreError> {
    if let Some(record) = store.read_first().await? {
        return Ok(record);
    }
    let record = store.create_default().await?;
    info!(email = %record.email, id = %record.id, "created default profile");
    Ok(record)
}

/// Profile shown to the caller; store failures yield `fallback` without retry.
pub async fn resolve_profile(store: &dyn ProfileStore, fallback: &ProfileFields) -> PublicProfile {
    match load_or_create(store).await {
        Ok(record) => ProfileFields::from(record).into(),
        Err(e) => {
            error!(error = %e, "profile store failed; using fallback profile");
            fallback.clone().into()
        }
    }
}

pub async fn build_profile_response(
    store: &dyn ProfileStore,
    clock: &dyn Clock,
    facts: &dyn FactSource,
    fallback_profile: &ProfileFields,
    fallback_fact: &str,
) -> ProfileResponse {
    let user = resolve_profile(store, fallback_profile).await;
    let timestamp = iso8601_millis(clock.now());
    let fact = fact_or_fallback(facts, fallback_fact).await;

    ProfileResponse {
        status: "success",
        user,
        timestamp,
        fact,
    }
}

pub async fn profile_response(st: &AppState) -> ProfileResponse {
    build_profile_response(
        st.profiles.as_ref(),
        st.clock.as_ref(),
        st.facts.as_ref(),
        &st.config.profile.fallback,
        &st.config.fact.fallback,
    )
    .await
}
