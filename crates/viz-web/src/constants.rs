// Page contract: element ids, selectors and event names the front-end binds to.

pub const CLUSTER_CANVAS_ID: &str = "clusterCanvas";
pub const FLOW_CANVAS_ID: &str = "heroFlowCanvas";

// Dataset selection
pub const PROFILE_EVENT: &str = "gg:dept-change"; // CustomEvent, detail = { key }
pub const PROFILE_TAB_SELECTOR: &str = ".tab";
pub const PROFILE_TAB_DATA_KEY: &str = "key"; // data-key attribute

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
