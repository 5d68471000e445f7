use super::types::{ArgKind, ArgSpec, CommandSpec};

const NO_ARGS: [ArgSpec; 0] = [];
const ARGS_CHIP: [ArgSpec; 1] = [ArgSpec {
    name: "index",
    kind: ArgKind::Usize,
    required: true,
}];
const ARGS_SEARCH: [ArgSpec; 1] = [ArgSpec {
    name: "text",
    kind: ArgKind::String,
    required: false,
}];
const ARGS_PAGE: [ArgSpec; 3] = [
    ArgSpec {
        name: "kind",
        kind: ArgKind::String,
        required: true,
    },
    ArgSpec {
        name: "icon",
        kind: ArgKind::String,
        required: true,
    },
    ArgSpec {
        name: "title",
        kind: ArgKind::String,
        required: true,
    },
];
const ARGS_PUSH_JSON: [ArgSpec; 1] = [ArgSpec {
    name: "page",
    kind: ArgKind::Json,
    required: true,
}];

const COMMAND_SPECS: [CommandSpec; 11] = [
    CommandSpec {
        id: "open",
        title: "Open Command Menu",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "close",
        title: "Close Command Menu",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "toggle",
        title: "Toggle Command Menu",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "back",
        title: "Go Back",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "chip",
        title: "Jump to Chip",
        args: &ARGS_CHIP,
    },
    CommandSpec {
        id: "search",
        title: "Set Search Text",
        args: &ARGS_SEARCH,
    },
    CommandSpec {
        id: "push",
        title: "Push Page",
        args: &ARGS_PAGE,
    },
    CommandSpec {
        id: "reset",
        title: "Reset to Page",
        args: &ARGS_PAGE,
    },
    CommandSpec {
        id: "push-json",
        title: "Push Page (JSON)",
        args: &ARGS_PUSH_JSON,
    },
    CommandSpec {
        id: "show",
        title: "Show Top Bar",
        args: &NO_ARGS,
    },
    CommandSpec {
        id: "quit",
        title: "Quit",
        args: &NO_ARGS,
    },
];

pub fn command_registry() -> &'static [CommandSpec] {
    &COMMAND_SPECS
}

pub fn find_command_spec(id: &str) -> Option<&'static CommandSpec> {
    COMMAND_SPECS.iter().find(|spec| spec.id == id)
}

/// One line per command, e.g. `chip <index:usize>` or `search [text]`.
pub fn usage_lines() -> Vec<String> {
    COMMAND_SPECS
        .iter()
        .map(|spec| {
            let mut line = spec.id.to_string();
            for arg in spec.args {
                let name = match arg.kind.label() {
                    Some(label) => format!("{}:{label}", arg.name),
                    None => arg.name.to_string(),
                };
                if arg.required {
                    line.push_str(&format!(" <{name}>"));
                } else {
                    line.push_str(&format!(" [{name}]"));
                }
            }
            format!("{line:<28}{}", spec.title)
        })
        .collect()
}
