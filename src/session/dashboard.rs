//! Dashboard session.
//!
//! A [`DashboardSession`] owns the [`EmployeeStore`], the reference catalog
//! and an [`Exporter`]. It is the only place that talks to the record
//! source, and it decides how source failures reach the store.

use serde::Serialize;
use tracing::{info, warn};

use crate::aggregation::{
    DepartmentMetrics, DepartmentShare, SalaryBucket, ScatterPoint, SummaryMetrics,
    department_distribution, department_metrics, salary_distribution, scatter_points,
    summary_metrics,
};
use crate::config::{DashboardConfig, ExportSettings};
use crate::error::{DashboardError, DashboardResult};
use crate::export::{DownloadSink, ExportFormat, Exporter, ProjectedRow};
use crate::models::{
    Employee, EmployeeForm, EmployeeUpdate, FilterUpdate, ReferenceCatalog, SortCriteria,
    SortField,
};
use crate::source::RecordSource;
use crate::store::{EmployeeStore, StoreAction};

/// Which records an export or preview covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportScope {
    /// Every canonical record.
    All,
    /// The filtered and sorted view.
    #[default]
    Filtered,
}

/// Everything the charts panel draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Department pie.
    pub department_distribution: Vec<DepartmentShare>,
    /// Salary histogram.
    pub salary_distribution: Vec<SalaryBucket>,
    /// Experience vs. salary scatter.
    pub scatter: Vec<ScatterPoint>,
    /// Per-department averages.
    pub department_metrics: Vec<DepartmentMetrics>,
}

/// A dashboard bound to a [`RecordSource`].
#[derive(Debug)]
pub struct DashboardSession<S> {
    source: S,
    store: EmployeeStore,
    catalog: ReferenceCatalog,
    exporter: Exporter,
}

impl<S: RecordSource> DashboardSession<S> {
    /// Creates a session with an empty catalog and default export settings.
    /// The catalog is filled by [`load`](Self::load).
    pub fn new(source: S) -> Self {
        Self::with_parts(source, ReferenceCatalog::default(), ExportSettings::default())
    }

    /// Creates a session using the catalog and export settings of `config`.
    pub fn from_config(source: S, config: &DashboardConfig) -> Self {
        Self::with_parts(source, config.catalog().clone(), config.export().clone())
    }

    fn with_parts(source: S, catalog: ReferenceCatalog, settings: ExportSettings) -> Self {
        Self {
            source,
            store: EmployeeStore::new(),
            catalog,
            exporter: Exporter::new(settings),
        }
    }

    /// The record source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The store, for reading records, the view and status.
    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    /// The reference catalog forms are resolved against.
    pub fn catalog(&self) -> &ReferenceCatalog {
        &self.catalog
    }

    /// The exporter.
    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    /// Fetches records and the reference lists, then replaces the store contents.
    ///
    /// On failure the store shows a load error until the next successful load.
    pub async fn load(&mut self) -> DashboardResult<()> {
        self.store.dispatch(StoreAction::SetLoading(true))?;

        let fetched = tokio::try_join!(
            self.source.list_all(),
            self.source.departments(),
            self.source.roles(),
            self.source.skills(),
        );
        let (records, departments, roles, skills) = match fetched {
            Ok(fetched) => fetched,
            Err(err) => return Err(self.load_failed(err)),
        };

        let count = records.len();
        if let Err(err) = self.store.dispatch(StoreAction::Load(records)) {
            return Err(self.load_failed(err));
        }
        self.catalog = ReferenceCatalog::new(departments, roles, skills);

        info!(
            employees = count,
            departments = self.catalog.departments.len(),
            roles = self.catalog.roles.len(),
            skills = self.catalog.skills.len(),
            "Dashboard data loaded"
        );
        Ok(())
    }

    /// Validates `form`, stores it through the source and appends the result.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` / `UnresolvedReference` before the source is contacted
    /// - any source failure; only failures other than validation set the store error
    /// - `DuplicateEmployee` when the source returns an id already in the store
    pub async fn create(&mut self, form: EmployeeForm) -> DashboardResult<Employee> {
        form.clone()
            .into_employee(String::new(), &self.catalog)
            .inspect_err(|err| warn!(error = %err, "Create rejected"))?;

        let created = self.source.create(form).await;
        let employee = match created {
            Ok(employee) => employee,
            Err(err) => return Err(self.source_failed("create", err)),
        };
        if let Err(err) = self.store.dispatch(StoreAction::Add(employee.clone())) {
            return Err(self.source_failed("create", err));
        }

        info!(id = %employee.id, name = %employee.full_name(), "Employee created");
        Ok(employee)
    }

    /// Applies a partial update to the employee with `id`.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` when `id` is not in the canonical records
    /// - `ValidationFailed` / `UnresolvedReference` before the source is contacted
    /// - any source failure; only failures other than not-found set the store error
    pub async fn update(&mut self, id: &str, update: EmployeeUpdate) -> DashboardResult<Employee> {
        let current = self.existing(id)?;
        update
            .apply_to(current, &self.catalog)
            .inspect_err(|err| warn!(id, error = %err, "Update rejected"))?;

        let updated = self.source.update(id, update).await;
        let employee = match updated {
            Ok(employee) => employee,
            Err(err) => return Err(self.source_failed("update", err)),
        };
        self.store.dispatch(StoreAction::Update(employee.clone()))?;

        info!(id, "Employee updated");
        Ok(employee)
    }

    /// Deletes the employee with `id`.
    ///
    /// # Errors
    ///
    /// - `EmployeeNotFound` when `id` is not in the canonical records
    /// - any source failure; only failures other than not-found set the store error
    pub async fn delete(&mut self, id: &str) -> DashboardResult<()> {
        self.existing(id)?;

        let deleted = self.source.delete(id).await;
        if let Err(err) = deleted {
            return Err(self.source_failed("delete", err));
        }
        self.store.dispatch(StoreAction::Delete(id.to_string()))?;

        info!(id, "Employee deleted");
        Ok(())
    }

    /// Merges a filter change into the current filters.
    pub fn set_filters(&mut self, update: FilterUpdate) -> DashboardResult<()> {
        self.store.dispatch(StoreAction::SetFilters(update))
    }

    /// Clears every filter.
    pub fn clear_filters(&mut self) -> DashboardResult<()> {
        self.set_filters(FilterUpdate::clear_all())
    }

    /// Replaces the current sort.
    pub fn set_sort(&mut self, sort: SortCriteria) -> DashboardResult<()> {
        self.store.dispatch(StoreAction::SetSort(sort))
    }

    /// Header click: toggles direction on the current field, otherwise sorts ascending.
    pub fn toggle_sort(&mut self, field: SortField) -> DashboardResult<()> {
        let sort = self.store.sort().clicked(field);
        self.set_sort(sort)
    }

    /// Clears the store-wide error.
    pub fn dismiss_error(&mut self) -> DashboardResult<()> {
        self.store.dispatch(StoreAction::SetError(None))
    }

    /// The records in `scope`.
    pub fn records(&self, scope: ExportScope) -> &[Employee] {
        match scope {
            ExportScope::All => self.store.records(),
            ExportScope::Filtered => self.store.view(),
        }
    }

    /// Summary cards over every canonical record.
    pub fn summary(&self) -> SummaryMetrics {
        summary_metrics(self.store.records())
    }

    /// Chart data over every canonical record.
    pub fn charts(&self) -> ChartData {
        let records = self.store.records();
        ChartData {
            department_distribution: department_distribution(records),
            salary_distribution: salary_distribution(records),
            scatter: scatter_points(records),
            department_metrics: department_metrics(records),
        }
    }

    /// Exports the records in `scope` and hands the file to `sink`.
    ///
    /// Returns the generated file name. Export failures never touch the store.
    pub fn export<K, D>(
        &self,
        scope: ExportScope,
        format: ExportFormat,
        field_keys: &[K],
        sink: &mut D,
    ) -> DashboardResult<String>
    where
        K: AsRef<str>,
        D: DownloadSink + ?Sized,
    {
        self.exporter
            .deliver(self.records(scope), format, field_keys, sink)
    }

    /// Exports the records in `scope` with the default field set.
    pub fn quick_export<D: DownloadSink + ?Sized>(
        &self,
        scope: ExportScope,
        format: ExportFormat,
        sink: &mut D,
    ) -> DashboardResult<String> {
        self.exporter.quick_export(self.records(scope), format, sink)
    }

    /// Previews the first rows of `scope`, using the configured row count.
    pub fn preview<K: AsRef<str>>(
        &self,
        scope: ExportScope,
        field_keys: &[K],
    ) -> Vec<ProjectedRow> {
        let rows = self.exporter.settings().preview_rows;
        self.exporter.preview(self.records(scope), field_keys, rows)
    }

    fn existing(&self, id: &str) -> DashboardResult<&Employee> {
        self.store.get(id).ok_or_else(|| {
            warn!(id, "Employee not found");
            DashboardError::EmployeeNotFound { id: id.to_string() }
        })
    }

    /// Clears the loading flag before routing a failed load.
    fn load_failed(&mut self, err: DashboardError) -> DashboardError {
        if let Err(dispatch_err) = self.store.dispatch(StoreAction::SetLoading(false)) {
            warn!(error = %dispatch_err, "Could not clear loading flag");
        }
        self.source_failed("load", err)
    }

    /// Routes a source failure: not-found and validation errors are returned
    /// as is, anything else also becomes the store-wide error.
    fn source_failed(&mut self, operation: &'static str, err: DashboardError) -> DashboardError {
        if err.is_not_found() {
            warn!(operation, error = %err, "Record source reported a missing employee");
            return err;
        }
        if err.is_validation() {
            warn!(operation, error = %err, "Record source rejected the employee");
            return err;
        }

        warn!(operation, error = %err, "Record source failed");
        let message = format!("Failed to {} employee data: {}", operation, err);
        if let Err(dispatch_err) = self.store.dispatch(StoreAction::SetError(Some(message))) {
            warn!(error = %dispatch_err, "Could not record store error");
        }
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::InMemoryRecordSource;
    use crate::store::StoreStatus;
    use crate::testing::{create_test_employee, test_catalog, with_salary};
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// A source whose every call fails, counting how often it was asked.
    #[derive(Default)]
    struct FailingSource {
        calls: AtomicUsize,
        not_found: bool,
    }

    impl FailingSource {
        fn reporting_not_found() -> Self {
            Self {
                not_found: true,
                ..Self::default()
            }
        }

        fn fail<T>(&self) -> DashboardResult<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.not_found {
                return Err(DashboardError::EmployeeNotFound {
                    id: "1".to_string(),
                });
            }
            Err(DashboardError::RecordSource {
                message: "connection refused".to_string(),
            })
        }
    }

    /// An in-memory source that hands out id "1" for every created record.
    struct FixedIdSource(InMemoryRecordSource);

    impl RecordSource for FixedIdSource {
        async fn list_all(&self) -> DashboardResult<Vec<Employee>> {
            self.0.list_all().await
        }
        async fn get_by_id(&self, id: &str) -> DashboardResult<Option<Employee>> {
            self.0.get_by_id(id).await
        }
        async fn create(&self, form: EmployeeForm) -> DashboardResult<Employee> {
            form.into_employee("1".to_string(), self.0.catalog())
        }
        async fn update(&self, id: &str, update: EmployeeUpdate) -> DashboardResult<Employee> {
            self.0.update(id, update).await
        }
        async fn delete(&self, id: &str) -> DashboardResult<()> {
            self.0.delete(id).await
        }
        async fn departments(&self) -> DashboardResult<Vec<crate::models::Department>> {
            self.0.departments().await
        }
        async fn roles(&self) -> DashboardResult<Vec<crate::models::Role>> {
            self.0.roles().await
        }
        async fn skills(&self) -> DashboardResult<Vec<crate::models::Skill>> {
            self.0.skills().await
        }
    }

    impl RecordSource for FailingSource {
        async fn list_all(&self) -> DashboardResult<Vec<Employee>> {
            self.fail()
        }
        async fn get_by_id(&self, _id: &str) -> DashboardResult<Option<Employee>> {
            self.fail()
        }
        async fn create(&self, _form: EmployeeForm) -> DashboardResult<Employee> {
            self.fail()
        }
        async fn update(&self, _id: &str, _update: EmployeeUpdate) -> DashboardResult<Employee> {
            self.fail()
        }
        async fn delete(&self, _id: &str) -> DashboardResult<()> {
            self.fail()
        }
        async fn departments(&self) -> DashboardResult<Vec<crate::models::Department>> {
            self.fail()
        }
        async fn roles(&self) -> DashboardResult<Vec<crate::models::Role>> {
            self.fail()
        }
        async fn skills(&self) -> DashboardResult<Vec<crate::models::Skill>> {
            self.fail()
        }
    }

    fn create_test_form() -> EmployeeForm {
        EmployeeForm {
            first_name: "Nina".to_string(),
            last_name: "Park".to_string(),
            email: "nina.park@pharma.com".to_string(),
            role_id: "6".to_string(),
            department_id: "4".to_string(),
            experience_years: 9,
            salary: Decimal::new(110_000, 0),
            location: "Seattle, WA".to_string(),
            start_date: "2019-09-02".to_string(),
            ..EmployeeForm::default()
        }
    }

    async fn create_loaded_session() -> DashboardSession<InMemoryRecordSource> {
        let source = InMemoryRecordSource::with_records(
            test_catalog(),
            vec![
                with_salary(create_test_employee("1", "Ann", "Lee"), 70_000),
                with_salary(create_test_employee("2", "Bob", "King"), 90_000),
            ],
        );
        let mut session = DashboardSession::new(source);
        session.load().await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_load_fills_store_and_catalog() {
        let session = create_loaded_session().await;
        assert_eq!(session.store().records().len(), 2);
        assert_eq!(session.store().view().len(), 2);
        assert_eq!(session.catalog().departments.len(), 3);
        assert_eq!(session.store().status(), StoreStatus::Ready);
    }

    #[tokio::test]
    async fn test_load_failure_sets_store_error() {
        let mut session = DashboardSession::new(FailingSource::default());
        let err = session.load().await.unwrap_err();

        assert!(matches!(err, DashboardError::RecordSource { .. }));
        assert!(!session.store().is_loading());
        assert!(matches!(session.store().status(), StoreStatus::Failed(_)));
    }

    #[tokio::test]
    async fn test_load_not_found_clears_loading() {
        let mut session = DashboardSession::new(FailingSource::reporting_not_found());
        let err = session.load().await.unwrap_err();

        assert!(err.is_not_found());
        assert!(!session.store().is_loading());
        assert_eq!(session.store().error(), None);
        assert_eq!(session.store().status(), StoreStatus::Ready);
    }

    #[tokio::test]
    async fn test_source_validation_failure_leaves_store_error_unset() {
        let source = InMemoryRecordSource::new(ReferenceCatalog::default());
        let mut session = DashboardSession::from_config(
            source,
            &DashboardConfig::new(test_catalog(), ExportSettings::default()),
        );

        let err = session.create(create_test_form()).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(session.store().error(), None);
        assert!(session.store().records().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_id_from_source_sets_store_error() {
        let source = FixedIdSource(InMemoryRecordSource::with_records(
            test_catalog(),
            vec![create_test_employee("1", "Ann", "Lee")],
        ));
        let mut session = DashboardSession::new(source);
        session.load().await.unwrap();

        let err = session.create(create_test_form()).await.unwrap_err();

        assert!(matches!(err, DashboardError::DuplicateEmployee { ref id } if id == "1"));
        assert!(session.store().error().is_some());
        assert_eq!(session.store().records().len(), 1);
    }

    #[tokio::test]
    async fn test_create_appends_to_store() {
        let mut session = create_loaded_session().await;
        let created = session.create(create_test_form()).await.unwrap();

        assert_eq!(created.department.name, "Manufacturing");
        assert_eq!(session.store().records().len(), 3);
        assert_eq!(session.store().view().last().unwrap().id, created.id);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_source() {
        let source = FailingSource::default();
        let mut session = DashboardSession::from_config(
            source,
            &DashboardConfig::new(test_catalog(), ExportSettings::default()),
        );
        let form = EmployeeForm {
            email: "not-an-email".to_string(),
            ..create_test_form()
        };

        let err = session.create(form).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(session.source().calls.load(Ordering::SeqCst), 0);
        assert_eq!(session.store().error(), None);
    }

    #[tokio::test]
    async fn test_unknown_department_is_rejected_before_source() {
        let mut session = DashboardSession::from_config(
            FailingSource::default(),
            &DashboardConfig::new(test_catalog(), ExportSettings::default()),
        );
        let form = EmployeeForm {
            department_id: "77".to_string(),
            ..create_test_form()
        };
        let err = session.create(form).await.unwrap_err();
        assert!(matches!(err, DashboardError::UnresolvedReference { .. }));
        assert_eq!(session.source().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_source_failure_on_create_sets_store_error() {
        let mut session = DashboardSession::from_config(
            FailingSource::default(),
            &DashboardConfig::new(test_catalog(), ExportSettings::default()),
        );
        session.create(create_test_form()).await.unwrap_err();
        assert!(session.store().error().unwrap().contains("connection refused"));

        session.dismiss_error().unwrap();
        assert_eq!(session.store().status(), StoreStatus::Ready);
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let mut session = create_loaded_session().await;
        let update = EmployeeUpdate {
            last_name: Some("Leigh".to_string()),
            ..EmployeeUpdate::default()
        };

        let updated = session.update("1", update).await.unwrap();

        assert_eq!(updated.last_name, "Leigh");
        assert_eq!(session.store().get("1").unwrap().last_name, "Leigh");
    }

    #[tokio::test]
    async fn test_update_unknown_id_skips_source() {
        let mut session = create_loaded_session().await;
        let err = session
            .update("404", EmployeeUpdate::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(session.store().error(), None);
    }

    #[tokio::test]
    async fn test_not_found_from_source_does_not_set_store_error() {
        let mut session = create_loaded_session().await;
        session.source().delete("2").await.unwrap();

        let err = session.delete("2").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(session.store().error(), None);
        assert!(session.store().contains("2"));
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let mut session = create_loaded_session().await;
        session.delete("1").await.unwrap();
        assert_eq!(session.store().records().len(), 1);
        assert_eq!(session.source().len().await, 1);
    }

    #[tokio::test]
    async fn test_filters_sort_and_scope() {
        let mut session = create_loaded_session().await;
        session
            .set_filters(FilterUpdate::default().search_term("bob"))
            .unwrap();
        assert_eq!(session.records(ExportScope::Filtered).len(), 1);
        assert_eq!(session.records(ExportScope::All).len(), 2);

        session.clear_filters().unwrap();
        session.toggle_sort(SortField::Salary).unwrap();
        session.toggle_sort(SortField::Salary).unwrap();
        assert_eq!(session.records(ExportScope::Filtered)[0].id, "2");
    }

    #[tokio::test]
    async fn test_summary_and_charts_cover_all_records() {
        let mut session = create_loaded_session().await;
        session
            .set_filters(FilterUpdate::default().search_term("ann"))
            .unwrap();

        let summary = session.summary();
        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.average_salary, Decimal::new(80_000, 0));

        let charts = session.charts();
        assert_eq!(charts.scatter.len(), 2);
        assert_eq!(charts.department_distribution[0].count, 2);
    }

    #[tokio::test]
    async fn test_export_filtered_scope() {
        let mut session = create_loaded_session().await;
        session
            .set_filters(FilterUpdate::default().search_term("king"))
            .unwrap();
        let mut downloads: Vec<crate::export::ExportDocument> = Vec::new();

        let filename = session
            .export(ExportScope::Filtered, ExportFormat::Csv, &["fullName"], &mut downloads)
            .unwrap();

        assert!(filename.starts_with("employees_"));
        assert_eq!(downloads.len(), 1);
        assert_eq!(downloads[0].as_text().unwrap(), "\"Full Name\"\n\"Bob King\"");
    }

    #[tokio::test]
    async fn test_failed_export_does_not_touch_store() {
        let mut session = create_loaded_session().await;
        session
            .set_filters(FilterUpdate::default().search_term("nobody"))
            .unwrap();
        let mut downloads: Vec<crate::export::ExportDocument> = Vec::new();

        let err = session
            .quick_export(ExportScope::Filtered, ExportFormat::Json, &mut downloads)
            .unwrap_err();

        assert!(matches!(err, DashboardError::NoData));
        assert!(downloads.is_empty());
        assert_eq!(session.store().error(), None);
    }

    #[tokio::test]
    async fn test_preview_uses_configured_rows() {
        let session = create_loaded_session().await;
        let preview = session.preview(ExportScope::All, &["email"]);
        assert_eq!(preview.len(), 2);
        assert_eq!(preview[0].labels().collect::<Vec<_>>(), vec!["Email"]);
    }
}
