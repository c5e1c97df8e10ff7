//! In-memory repository integration tests.

mod repository_contract;

use std::sync::Arc;

use gestor_tareas::task::adapters::memory::InMemoryTaskRepository;
use repository_contract::SharedRepository;
use rstest::{fixture, rstest};

#[fixture]
fn repo() -> SharedRepository {
    Arc::new(InMemoryTaskRepository::new())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_assigns_ids_and_round_trips(repo: SharedRepository) {
    repository_contract::insert_assigns_ids_and_round_trips(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_rejects_duplicate_title(repo: SharedRepository) {
    repository_contract::insert_rejects_duplicate_title(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_for_unknown_task(repo: SharedRepository) {
    repository_contract::find_by_id_returns_none_for_unknown_task(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_mutable_fields(repo: SharedRepository) {
    repository_contract::update_replaces_mutable_fields(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_reports_missing_task(repo: SharedRepository) {
    repository_contract::update_reports_missing_task(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_rejects_title_of_another_task(repo: SharedRepository) {
    repository_contract::update_rejects_title_of_another_task(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_reports_removal_and_never_reuses_ids(repo: SharedRepository) {
    repository_contract::delete_reports_removal_and_never_reuses_ids(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn title_exists_honours_exclusion(repo: SharedRepository) {
    repository_contract::title_exists_honours_exclusion(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_orders_by_requested_field(repo: SharedRepository) {
    repository_contract::list_orders_by_requested_field(repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_inserts_admit_one_title(repo: SharedRepository) {
    repository_contract::concurrent_inserts_admit_one_title(repo).await;
}
