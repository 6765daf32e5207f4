// Key binding reference shown in the help pane

pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("Tab / Shift+Tab", "Cycle focus between search, layers and entities"),
    ("Up / Down, k / j", "Move the cursor"),
    ("PgUp / PgDn", "Move the cursor by a page"),
    ("Home / End", "Jump to the first / last item"),
    ("Enter", "Open the layer or show the entity under the cursor"),
    ("Esc", "Go back / clear the search"),
    ("v", "Toggle visibility of the layer under the cursor"),
    ("b / t", "List every block / text entity"),
    ("Space", "Select or deselect the entity under the cursor"),
    ("a / n", "Select all / none of the listed entities"),
    ("f", "Cycle copy format (text, csv, json)"),
    ("c / y", "Copy the selection (or the current entity)"),
    ("/", "Jump to the search bar"),
    ("Backspace", "Delete the last search character"),
    ("? / F1", "Show or hide this help"),
    ("q / Ctrl+C", "Quit"),
];

/// Search filter syntax, shown below the key bindings
pub const QUERY_SYNTAX: &[(&str, &str)] = &[
    ("on:true / on:false", "Layers that are visible / hidden"),
    ("frozen:true / frozen:false", "Layers that are frozen / unfrozen"),
    ("anything else", "Layers whose name contains the text (any case)"),
];
