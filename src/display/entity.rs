//! Reference entity display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Entity, EntityKind};

#[derive(Tabled)]
struct EntityRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
}

/// Format a list of entities of one kind as a table
pub fn format_entity_list(kind: EntityKind, entities: &[Entity]) -> String {
    if entities.is_empty() {
        return format!("No {} found.\n", kind.resource());
    }

    let rows = entities.iter().map(|e| EntityRow {
        id: e.id.get(),
        name: e.name.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::psql());

    let mut output = format!("{} list ({})\n", kind.label(), entities.len());
    output.push_str(&table.to_string());
    output.push('\n');
    output
}

/// Format a single entity
pub fn format_entity_details(kind: EntityKind, entity: &Entity) -> String {
    format!("{}: {}\n  ID: {}\n", kind.label(), entity.name, entity.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_list() {
        let list = vec![Entity::new(1, "Cash"), Entity::new(2, "Bank Transfer")];
        let output = format_entity_list(EntityKind::Mode, &list);
        assert!(output.starts_with("Mode list (2)"));
        assert!(output.contains("Bank Transfer"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_entity_list(EntityKind::Business, &[]);
        assert_eq!(output, "No businesses found.\n");
    }

    #[test]
    fn test_format_details() {
        let output = format_entity_details(EntityKind::Head, &Entity::new(5, "Rent"));
        assert_eq!(output, "Head: Rent\n  ID: 5\n");
    }
}
