//! HTML fragment rendering
//!
//! Pure functions from todo snapshots to markup. Attribute names follow htmx:
//! each item targets its own `<div>` so toggle responses replace it in place
//! and the empty delete response removes it.

use html_escape::encode_text;
use todo_core::Todo;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.3";
const TAILWIND_SRC: &str = "https://cdn.tailwindcss.com";

/// Full page shell that loads `/todos` into the body on load
pub fn page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no" />
    <title>The Beth Stack</title>
    <script src="{HTMX_SRC}"></script>
    <script src="{TAILWIND_SRC}"></script>
  </head>
  <body class="flex w-full h-screen justify-center items-center" hx-get="/todos" hx-trigger="load" hx-swap="innerHTML"></body>
</html>
"#
    )
}

/// A single todo row with its toggle checkbox and delete button
pub fn todo_item(todo: &Todo) -> String {
    let checked = if todo.completed { " checked" } else { "" };
    format!(
        r#"<div class="flex flex-row space-x-3"><p>{content}</p><input type="checkbox"{checked} hx-post="/todos/toggle/{id}" hx-target="closest div" hx-swap="outerHTML" /><button class="text-red-600" hx-delete="/todos/{id}" hx-target="closest div" hx-swap="outerHTML">X</button></div>"#,
        content = encode_text(&todo.content),
        id = todo.id,
    )
}

/// Form that posts a new todo and inserts the returned item above itself
pub fn todo_form() -> String {
    r#"<form class="flex flex-row space-x-3" hx-post="/todos" hx-swap="beforebegin"><input type="text" name="content" class="border border-black" /><button type="submit">Submit</button></form>"#
        .to_string()
}

/// Every todo followed by the creation form
pub fn todo_list(todos: &[Todo]) -> String {
    let mut html = String::from("<div>");
    for todo in todos {
        html.push_str(&todo_item(todo));
    }
    html.push_str(&todo_form());
    html.push_str("</div>");
    html
}
