
use crate::{
    engine::RequestContext,
    model::Params,
    projection::{ParamKeyFilter, ProjectionSpec, ProjectionTree, project::project_partition},
    test_fixtures::{test_partition, test_table},
};

fn ctx() -> RequestContext {
    RequestContext::for_table(&test_table())
}

fn project(paths: &[&str]) -> crate::model::Partition {
    let table = test_table();
    let partition = test_partition(&table, &["CA", "PaloAlto"], 1_690_000_100);
    let tree = ProjectionTree::from_spec(&ProjectionSpec::fields(paths.iter().copied())).unwrap();
    project_partition(&partition, &tree, &ctx(), &ParamKeyFilter::default())
}

#[test]
fn virtual_fields_come_from_the_request_context() {
    let projected = project(&["dbName", "tableName", "catName"]);

    assert_eq!(projected.db_name.as_deref(), Some("test_projection_db"));
    assert_eq!(projected.table_name.as_deref(), Some("test_projection_table"));
    assert_eq!(projected.cat_name.as_deref(), Some("main"));
    // Nothing else was requested.
    assert_eq!(projected.values, None);
    assert_eq!(projected.sd, None);
    assert_eq!(projected.parameters, None);
}

#[test]
fn unrequested_fields_stay_unpopulated() {
    let projected = project(&["values"]);

    assert!(projected.values.is_some());
    assert_eq!(projected.create_time, None);
    assert_eq!(projected.last_access_time, None);
    assert_eq!(projected.parameters, None);
    assert_eq!(projected.sd, None);
    assert_eq!(projected.db_name, None);
}

#[test]
fn numeric_fields_are_copied_verbatim() {
    let projected = project(&["createTime", "lastAccessTime", "sd.numBuckets"]);

    assert_eq!(projected.create_time, Some(1_690_000_100));
    assert_eq!(projected.last_access_time, Some(1_690_000_160));
    assert_eq!(projected.sd.unwrap().num_buckets, Some(2));
}

#[test]
fn selected_parameter_maps_are_filtered_everywhere() {
    let table = test_table();
    let partition = test_partition(&table, &["CA", "PaloAlto"], 1_690_000_100);
    let tree = ProjectionTree::from_spec(&ProjectionSpec::fields([
        "parameters",
        "sd.parameters",
        "sd.serdeInfo.parameters",
    ]))
    .unwrap();
    let filter = ParamKeyFilter::new(Some("key%"), None);

    let projected = project_partition(&partition, &tree, &ctx(), &filter);

    assert_eq!(
        projected.parameters,
        Some(Params::from([("key1", "S1"), ("key2", "S2")]))
    );
    let sd = projected.sd.unwrap();
    // Selected but filtered to nothing: empty, not unpopulated.
    assert_eq!(sd.parameters, Some(Params::default()));
    assert_eq!(
        sd.serde_info.unwrap().parameters,
        Some(Params::default())
    );
}

#[test]
fn partition_without_descriptor_projects_no_descriptor() {
    let table = test_table();
    let mut partition = test_partition(&table, &["CA", "PaloAlto"], 1_690_000_100);
    partition.sd = None;
    let tree = ProjectionTree::from_spec(&ProjectionSpec::fields(["values", "sd"])).unwrap();

    let projected = project_partition(&partition, &tree, &ctx(), &ParamKeyFilter::default());

    assert!(projected.values.is_some());
    assert_eq!(projected.sd, None);
}

#[test]
fn full_projection_reproduces_the_partition() {
    let table = test_table();
    let partition = test_partition(&table, &["CA", "PaloAlto"], 1_690_000_100);
    let tree = ProjectionTree::all();

    let projected = project_partition(&partition, &tree, &ctx(), &ParamKeyFilter::default());

    assert_eq!(projected, partition);
}

#[test]
fn input_partition_is_never_mutated() {
    let table = test_table();
    let partition = test_partition(&table, &["CA", "PaloAlto"], 1_690_000_100);
    let before = partition.clone();
    let tree = ProjectionTree::all();

    let _ = project_partition(&partition, &tree, &ctx(), &ParamKeyFilter::default());

    assert_eq!(partition, before);
}
