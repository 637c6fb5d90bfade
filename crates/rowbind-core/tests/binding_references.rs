use pretty_assertions::assert_eq;
use rowbind_core::binding::{Binding, ReferenceBinding};
use rowbind_core::schema::app::{self, EntityId, PropertyId};
use rowbind_core::schema::db::{self, Table};
use std::sync::Arc;

const DEPARTMENT: EntityId = EntityId(0);
const EMPLOYEE: EntityId = EntityId(1);

const EMPLOYEE_DEPARTMENT: PropertyId = EMPLOYEE.property(2);
const EMPLOYEE_MANAGER: PropertyId = EMPLOYEE.property(3);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Schema:
///   Department { id, name }
///   Employee { id, name, department: Department, manager: Employee? }
fn schema() -> Arc<app::Schema> {
    let mut builder = app::Schema::builder();
    let department = builder.declare("Department");
    let employee = builder.declare("Employee");

    builder
        .entity(department)
        .scalar("id", app::Type::I32)
        .scalar("name", app::Type::String);

    builder
        .entity(employee)
        .scalar("id", app::Type::I32)
        .scalar("name", app::Type::String)
        .entity("department", department)
        .entity("manager", employee)
        .nullable();

    Arc::new(builder.build().unwrap())
}

fn departments(schema: &Arc<app::Schema>) -> Arc<Table> {
    let mut table = Table::with_entity("t_department", schema.entity_ref(DEPARTMENT));
    table
        .register_column("id", db::Type::Integer(4))
        .unwrap()
        .primary_key()
        .bind_to(|d| d.get("id"))
        .unwrap();
    table
        .register_column("name", db::Type::VarChar(128))
        .unwrap()
        .bind_to(|d| d.get("name"))
        .unwrap();
    Arc::new(table)
}

#[test]
fn reference_single_property() {
    init_logging();
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let id = employees
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("department"))
        .unwrap();

    let binding = employees.column(id).binding().unwrap();
    assert_eq!(
        binding,
        &Binding::Reference(ReferenceBinding::new(
            departments.clone(),
            EMPLOYEE_DEPARTMENT
        ))
    );

    let reference = binding.expect_reference();
    assert!(Arc::ptr_eq(&reference.table, &departments));
    assert_eq!(reference.table.alias(), None);
}

#[test]
fn same_table_referenced_from_two_columns() {
    let schema = schema();
    let departments = departments(&schema);

    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));
    let mut managers = Table::with_entity("t_manager", schema.entity_ref(EMPLOYEE));

    employees
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("department"))
        .unwrap();
    managers
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("department"))
        .unwrap();

    assert_eq!(Arc::strong_count(&departments), 3);
}

#[test]
fn nested_reference_is_rejected() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let err = employees
        .register_column("manager_department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("manager").get("department"))
        .unwrap_err();

    assert!(err.is_nested_reference());
    assert_eq!(
        err.to_string(),
        "reference binding doesn't support nested properties"
    );
    assert!(!employees.get("manager_department_id").unwrap().is_bound());
}

#[test]
fn reference_selector_reading_nothing_fails() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let err = employees
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |_| None::<()>)
        .unwrap_err();

    assert!(err.is_empty_binding_path());
    assert!(!employees.get("department_id").unwrap().is_bound());
}

#[test]
fn reference_on_table_without_entity_fails() {
    let schema = schema();
    let departments = departments(&schema);
    let mut audit = Table::new("t_audit");

    let err = audit
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("department"))
        .unwrap_err();

    assert!(err.is_unconfigured_entity());
}

#[test]
fn reference_unknown_property_fails() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let err = employees
        .register_column("division_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("division"))
        .unwrap_err();

    assert!(err.is_unknown_property());
}

#[test]
fn self_reference_through_manager() {
    let schema = schema();

    let mut previous = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));
    previous
        .register_column("id", db::Type::Integer(4))
        .unwrap()
        .primary_key()
        .bind_to(|e| e.get("id"))
        .unwrap();
    let previous = Arc::new(previous);

    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));
    let id = employees
        .register_column("manager_id", db::Type::Integer(4))
        .unwrap()
        .references(&previous, |e| e.get("manager"))
        .unwrap();

    assert_eq!(
        employees.column(id).binding().unwrap().first_property(),
        EMPLOYEE_MANAGER
    );
}

#[test]
fn reference_then_rebind_fails() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    employees
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("department"))
        .unwrap();

    let err = employees
        .column_registration("department_id")
        .unwrap()
        .bind_to(|e| e.get("department").get("id"))
        .unwrap_err();

    assert!(err.is_already_bound());
    assert!(employees
        .get("department_id")
        .unwrap()
        .binding()
        .unwrap()
        .is_reference());
}

#[test]
fn reference_to_scalar_property_is_rejected() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let err = employees
        .register_column("name", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("name"))
        .unwrap_err();

    assert!(err.is_reference_type_mismatch());
    assert_eq!(
        err.to_string(),
        "property `Employee::name` does not hold the entity of referenced table `t_department`"
    );
    assert!(!employees.get("name").unwrap().is_bound());
}

#[test]
fn reference_to_table_of_another_entity_is_rejected() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let err = employees
        .register_column("manager_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("manager"))
        .unwrap_err();

    assert!(err.is_reference_type_mismatch());
    assert_eq!(
        err.to_string(),
        "property `Employee::manager` does not hold the entity of referenced table `t_department`"
    );
    assert!(!employees.get("manager_id").unwrap().is_bound());
}

#[test]
fn repeated_reference_read_is_a_branch_not_a_nesting() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let err = employees
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| {
            e.get("department");
            e.get("department")
        })
        .unwrap_err();

    assert!(err.is_branched_path());
    assert!(!err.is_nested_reference());
}

#[test]
fn reference_binding_accessors() {
    let schema = schema();
    let departments = departments(&schema);
    let mut employees = Table::with_entity("t_employee", schema.entity_ref(EMPLOYEE));

    let id = employees
        .register_column("department_id", db::Type::Integer(4))
        .unwrap()
        .references(&departments, |e| e.get("department"))
        .unwrap();

    let binding = employees.column(id).binding().unwrap();
    assert!(binding.as_nested().is_none());
    assert_eq!(
        binding.as_reference().map(|reference| reference.table.name()),
        Some("t_department")
    );
}
