use crate::error::QueryError;
use connectors::{file::csv::loader::CsvTableLoader, loader::TableLoader};
use engine_config::settings::EngineSettings;
use engine_processing::{
    filter::pipeline::WhereFilter,
    join::{JoinEngine, JoinInputs, parse_join_type},
    projection::project,
};
use model::{
    query::{descriptor::QueryDescriptor, join::RightJoinPolicy},
    records::row::Row,
};
use std::{sync::Arc, time::Instant};
use tracing::{debug, info};

/// Runs `query` with default settings against tables served by `loader`.
pub async fn execute_query(
    loader: Arc<dyn TableLoader>,
    query: &QueryDescriptor,
) -> Result<Vec<Row>, QueryError> {
    QueryExecutor::new(loader).execute(query).await
}

/// Loads, joins, filters and projects. Holds no per-query state, so one
/// executor can serve any number of queries, concurrently or not.
#[derive(Clone)]
pub struct QueryExecutor {
    loader: Arc<dyn TableLoader>,
    joins: JoinEngine,
}

impl QueryExecutor {
    pub fn new(loader: Arc<dyn TableLoader>) -> Self {
        QueryExecutor {
            loader,
            joins: JoinEngine::default(),
        }
    }

    /// An executor reading CSV tables as described by `settings`.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let loader = CsvTableLoader::new(&settings.data_dir, settings.csv.clone())
            .with_extension(&settings.extension);
        QueryExecutor::new(Arc::new(loader)).with_right_join_policy(settings.right_join)
    }

    pub fn with_right_join_policy(mut self, policy: RightJoinPolicy) -> Self {
        self.joins = JoinEngine::new(policy);
        self
    }

    pub async fn execute(&self, query: &QueryDescriptor) -> Result<Vec<Row>, QueryError> {
        let start = Instant::now();
        info!("Executing query on table '{}'", query.table);

        // Operators and join types are checked before any table is read.
        let filter = WhereFilter::compile(&query.where_clauses)?;

        let rows = match query.join_spec() {
            Some((join_table, condition)) => {
                let join_type = parse_join_type(query.join_type.as_deref())?;
                let (main_rows, join_rows) = tokio::try_join!(
                    self.loader.load_table(&query.table),
                    self.loader.load_table(join_table)
                )?;
                debug!(
                    "Loaded {} rows from '{}' and {} rows from '{}'",
                    main_rows.len(),
                    query.table,
                    join_rows.len(),
                    join_table
                );

                self.joins.join(
                    join_type,
                    &JoinInputs {
                        main_rows: &main_rows,
                        join_rows: &join_rows,
                        condition,
                        selected_fields: &query.fields,
                        main_table: &query.table,
                    },
                )
            }
            None => {
                let rows = self.loader.load_table(&query.table).await?;
                debug!("Loaded {} rows from '{}'", rows.len(), query.table);
                rows
            }
        };

        let before = rows.len();
        let rows = filter.apply(rows);
        debug!("WHERE kept {} of {} rows", rows.len(), before);

        let result = project(&rows, &query.fields);
        info!(
            "Query on '{}' returned {} rows in {} ms",
            query.table,
            result.len(),
            start.elapsed().as_millis()
        );

        Ok(result)
    }
}
