use super::Table;
use crate::binding::Binding;
use crate::schema::app::PropertyId;
use crate::{Error, Result};

/// Options for expanding reference bindings into joins.
#[derive(Debug, Clone)]
pub struct JoinConfig {
    /// Prefix of generated aliases; the join counter is appended.
    alias_prefix: String,

    /// Longest reference route followed before giving up.
    max_depth: usize,
}

/// One referenced table to join, as found by [`Table::reference_joins`].
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedReference {
    /// The referenced table, aliased for this join.
    pub table: Table,

    /// Alias (or name) of the table holding the reference column.
    pub source_alias: String,

    /// The reference column on the source table.
    pub source_column: String,

    /// The primary key column of the referenced table the join matches on.
    pub target_column: String,

    /// The source entity's property the joined row hydrates into.
    pub property: PropertyId,

    /// 1 for references held directly by the root table.
    pub depth: usize,
}

impl JoinConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.alias_prefix = prefix.into();
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for JoinConfig {
    fn default() -> Self {
        Self {
            alias_prefix: "_ref".to_string(),
            max_depth: 16,
        }
    }
}

impl JoinedReference {
    pub fn alias(&self) -> &str {
        self.table.alias_or_name()
    }
}

struct Planner<'a> {
    config: &'a JoinConfig,

    joins: Vec<JoinedReference>,

    /// Table names from the root to the table being expanded
    route: Vec<String>,
}

/// Walks reference bindings depth-first, in column order. Each join gets the
/// alias `{prefix}{n}`, `n` counting joins across the whole walk.
pub(super) fn plan(root: &Table, config: &JoinConfig) -> Result<Vec<JoinedReference>> {
    let mut planner = Planner {
        config,
        joins: vec![],
        route: vec![root.name().to_string()],
    };

    planner.expand(root)?;
    Ok(planner.joins)
}

impl Planner<'_> {
    fn expand(&mut self, source: &Table) -> Result<()> {
        for column in source.columns() {
            let Some(Binding::Reference(reference)) = column.binding() else {
                continue;
            };

            let target = &reference.table;
            let depth = self.route.len();

            if self.route.iter().any(|name| name == target.name()) {
                return Err(Error::circular_reference(
                    target.name(),
                    self.route.iter().rev().map(String::as_str),
                ));
            }

            if depth > self.config.max_depth {
                return Err(Error::reference_depth_exceeded(
                    self.config.max_depth,
                    target.name(),
                    self.route.iter().rev().map(String::as_str),
                ));
            }

            let target_column = target
                .primary_key()
                .ok_or_else(|| Error::missing_primary_key(target.name()))?
                .name
                .clone();

            let alias = format!("{}{}", self.config.alias_prefix, self.joins.len());
            let joined = target.aliased(alias);

            log::debug!(
                "joining {joined} on {}.{} = {}.{target_column}",
                source.alias_or_name(),
                column.name,
                joined.alias_or_name(),
            );

            self.joins.push(JoinedReference {
                table: joined.clone(),
                source_alias: source.alias_or_name().to_string(),
                source_column: column.name.clone(),
                target_column,
                property: reference.property,
                depth,
            });

            self.route.push(target.name().to_string());
            self.expand(&joined)?;
            self.route.pop();
        }

        Ok(())
    }
}
