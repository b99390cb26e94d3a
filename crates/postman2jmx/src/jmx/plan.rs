//! The fixed test-plan skeleton.
//!
//! The output document always has the same shape: `jmeterTestPlan` ->
//! `hashTree` -> (`TestPlan` + `hashTree` -> (`ThreadGroup` + `hashTree`
//! holding the variable blocks and samplers)). The thread-group
//! parameters are deliberately inert (one thread, one loop, no
//! scheduler): the generated plan is a single deterministic pass over all
//! requests, not a load profile.

use crate::jmx::document::XmlElement;
use crate::jmx::props::{bool_prop, hash_tree, string_prop, user_defined_variables};
use crate::jmx::sampler;
use crate::postman::model::{Collection, KeyValue};

/// Fallback thread-group name when the collection has no `info.name`.
const DEFAULT_THREAD_GROUP_NAME: &str = "Postman Requests";

/// Build the complete output document for a collection and its enabled
/// environment entries.
pub fn build_plan(collection: &Collection, environment: &[KeyValue]) -> XmlElement {
    let mut scope = hash_tree();

    if let Some((variables, closer)) =
        user_defined_variables(&collection.variable, "Collection Variables")
    {
        scope.push(variables);
        scope.push(closer);
    }

    if let Some((variables, closer)) = user_defined_variables(environment, "Environment Variables")
    {
        scope.push(variables);
        scope.push(closer);
    }

    sampler::append_items(&collection.item, &mut scope);

    let thread_group = thread_group(collection.name().unwrap_or(DEFAULT_THREAD_GROUP_NAME));

    XmlElement::new("jmeterTestPlan")
        .attr("version", "1.2")
        .attr("properties", "5.0")
        .attr("jmeter", "5.2.1")
        .child(
            hash_tree()
                .child(test_plan())
                .child(hash_tree().child(thread_group).child(scope)),
        )
}

/// The fixed `TestPlan` node: functional mode off, thread groups not
/// serialized, and an always-present, always-empty user-defined-variables
/// block. Collection and environment variables are injected one level
/// down, inside the thread-group scope.
fn test_plan() -> XmlElement {
    XmlElement::new("TestPlan")
        .attr("guiclass", "TestPlanGui")
        .attr("testclass", "TestPlan")
        .attr("testname", "Postman Collection Import")
        .attr("enabled", "true")
        .child(bool_prop("TestPlan.functional_mode", false))
        .child(string_prop("TestPlan.comments", ""))
        .child(bool_prop("TestPlan.serialize_threadgroups", false))
        .child(string_prop("TestPlan.user_define_classpath", ""))
        .child(
            XmlElement::new("elementProp")
                .attr("name", "TestPlan.user_defined_variables")
                .attr("elementType", "Arguments")
                .child(XmlElement::new("collectionProp").attr("name", "Arguments.arguments")),
        )
}

/// A single-thread, single-iteration thread group named after the
/// collection.
fn thread_group(name: &str) -> XmlElement {
    XmlElement::new("ThreadGroup")
        .attr("guiclass", "ThreadGroupGui")
        .attr("testclass", "ThreadGroup")
        .attr("testname", name)
        .attr("enabled", "true")
        .child(
            XmlElement::new("elementProp")
                .attr("name", "ThreadGroup.main_controller")
                .attr("elementType", "LoopController")
                .attr("guiclass", "LoopControlPanel")
                .attr("testclass", "LoopController")
                .attr("enabled", "true")
                .child(bool_prop("LoopController.continue_forever", false))
                .child(string_prop("LoopController.loops", "1")),
        )
        .child(string_prop("ThreadGroup.num_threads", "1"))
        .child(string_prop("ThreadGroup.ramp_time", "1"))
        .child(bool_prop("ThreadGroup.scheduler", false))
        .child(string_prop("ThreadGroup.duration", "0"))
        .child(string_prop("ThreadGroup.delay", "0"))
        .child(string_prop("ThreadGroup.on_sample_error", "continue"))
        .child(bool_prop("ThreadGroup.same_user_on_next_iteration", true))
}
