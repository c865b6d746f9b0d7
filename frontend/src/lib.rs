pub mod api;
pub mod sync;

mod components;

use std::rc::Rc;

use common::{tree, FileNode, Forest};
use components::explorer::FileExplorer;
use sandbox::Marker;
use sync::{Debouncer, LayoutPrefs, DEBOUNCE_MS};
use wasm_bindgen::prelude::*;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let forest = use_state(Forest::new);
    let open_tabs = use_state(Vec::<String>::new);
    let active_file_id = use_state(|| None::<String>);
    let selected_folder_id = use_state(|| None::<String>);
    let output = use_state(Vec::<String>::new);
    let marker = use_state(|| None::<Marker>);
    let layout = use_state(LayoutPrefs::load);

    let debouncer = use_mut_ref(|| {
        Debouncer::new(
            DEBOUNCE_MS,
            Rc::new(sync::save_in_background) as Rc<dyn Fn(Forest)>,
        )
    });

    // Initial pull: one load on startup, no retry on failure.
    {
        let forest = forest.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_snippets().await {
                    Ok(fetched) => forest.set(fetched),
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to load snippets: {err}").into(),
                        );
                    }
                }
            });
            || ()
        });
    }

    let add_item = {
        let forest = forest.clone();
        let selected_folder_id = selected_folder_id.clone();
        let active_file_id = active_file_id.clone();
        let open_tabs = open_tabs.clone();
        move |is_folder: bool| {
            let label = if is_folder { "Folder name:" } else { "File name:" };
            let Some(name) = gloo_dialogs::prompt(label, None) else {
                return;
            };
            let name = name.trim().to_string();
            if name.is_empty() {
                return;
            }

            let id = uuid::Uuid::new_v4().to_string();
            let node = if is_folder {
                FileNode::folder(&id, &name)
            } else {
                FileNode::file(&id, &name)
            };

            let updated = tree::insert((*forest).clone(), node, selected_folder_id.as_deref());
            forest.set(updated.clone());
            sync::save_in_background(updated);

            if is_folder {
                selected_folder_id.set(Some(id));
            } else {
                let mut tabs = (*open_tabs).clone();
                tabs.push(id.clone());
                open_tabs.set(tabs);
                active_file_id.set(Some(id));
            }
        }
    };

    let on_add_file = {
        let add_item = add_item.clone();
        Callback::from(move |_| add_item(false))
    };
    let on_add_folder = Callback::from(move |_| add_item(true));

    let on_select = {
        let forest = forest.clone();
        let open_tabs = open_tabs.clone();
        let active_file_id = active_file_id.clone();
        let selected_folder_id = selected_folder_id.clone();
        Callback::from(move |id: String| {
            let Some(node) = tree::find(&forest, &id) else {
                return;
            };
            if node.is_folder() {
                selected_folder_id.set(Some(id));
                return;
            }
            selected_folder_id.set(None);
            if !open_tabs.contains(&id) {
                let mut tabs = (*open_tabs).clone();
                tabs.push(id.clone());
                open_tabs.set(tabs);
            }
            active_file_id.set(Some(id));
        })
    };

    let on_rename = {
        let forest = forest.clone();
        Callback::from(move |id: String| {
            let current = tree::find(&forest, &id)
                .map(|node| node.name().to_string())
                .unwrap_or_default();
            let Some(new_name) = gloo_dialogs::prompt("New name:", Some(&current)) else {
                return;
            };
            let new_name = new_name.trim().to_string();
            if new_name.is_empty() {
                return;
            }
            let updated = tree::rename((*forest).clone(), &id, &new_name);
            forest.set(updated.clone());
            sync::save_in_background(updated);
        })
    };

    let on_delete = {
        let forest = forest.clone();
        let open_tabs = open_tabs.clone();
        let active_file_id = active_file_id.clone();
        Callback::from(move |id: String| {
            let name = tree::find(&forest, &id)
                .map(|node| node.name().to_string())
                .unwrap_or_default();
            if !gloo_dialogs::confirm(&format!("Delete {name}?")) {
                return;
            }

            let updated = tree::delete((*forest).clone(), &id);
            forest.set(updated.clone());
            sync::delete_in_background(id.clone(), updated);

            let tabs: Vec<String> = open_tabs.iter().filter(|t| **t != id).cloned().collect();
            if active_file_id.as_deref() == Some(id.as_str()) {
                active_file_id.set(tabs.first().cloned());
            }
            open_tabs.set(tabs);
        })
    };

    let on_close_tab = {
        let open_tabs = open_tabs.clone();
        let active_file_id = active_file_id.clone();
        Callback::from(move |id: String| {
            let tabs: Vec<String> = open_tabs.iter().filter(|t| **t != id).cloned().collect();
            if active_file_id.as_deref() == Some(id.as_str()) {
                active_file_id.set(tabs.first().cloned());
            }
            open_tabs.set(tabs);
        })
    };

    let on_editor_input = {
        let forest = forest.clone();
        let active_file_id = active_file_id.clone();
        let debouncer = debouncer.clone();
        Callback::from(move |e: InputEvent| {
            let Some(id) = (*active_file_id).clone() else {
                return;
            };
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let updated = tree::update_content((*forest).clone(), &id, &textarea.value());
            forest.set(updated.clone());
            debouncer.borrow().push(updated);
        })
    };

    let on_run = {
        let forest = forest.clone();
        let active_file_id = active_file_id.clone();
        let output = output.clone();
        let marker = marker.clone();
        Callback::from(move |_| {
            let Some(id) = active_file_id.as_deref() else {
                return;
            };
            let Some(source) = tree::find(&forest, id).and_then(|node| node.content()) else {
                return;
            };
            let result = sandbox::run_snippet(source);
            output.set(result.lines);
            marker.set(result.marker);
        })
    };

    let toggle_sidebar = {
        let layout = layout.clone();
        Callback::from(move |_| {
            let next = LayoutPrefs {
                open: !layout.open,
                ..(*layout).clone()
            };
            next.store();
            layout.set(next);
        })
    };

    let active_file =
        active_file_id.as_deref().and_then(|id| tree::find(&forest, id).cloned());

    html! {
        <div class="container">
            if layout.open {
                <nav class="sidebar" style={format!("width: {}px", layout.width)}>
                    <FileExplorer
                        tree={(*forest).clone()}
                        selected_folder_id={(*selected_folder_id).clone()}
                        on_select={on_select}
                        on_add_file={on_add_file}
                        on_add_folder={on_add_folder}
                        on_rename={on_rename}
                        on_delete={on_delete}
                    />
                </nav>
            }
            <main class="content">
                <div class="toolbar">
                    <button class="sidebar-toggle" onclick={toggle_sidebar}>
                        { if layout.open { "◀" } else { "▶" } }
                    </button>
                    <div class="tabs">
                        { for open_tabs.iter().filter_map(|tab_id| {
                            let file = tree::find(&forest, tab_id)?;
                            let is_active = active_file_id.as_deref() == Some(tab_id.as_str());
                            let select = {
                                let active_file_id = active_file_id.clone();
                                let id = tab_id.clone();
                                Callback::from(move |_| active_file_id.set(Some(id.clone())))
                            };
                            let close = {
                                let on_close_tab = on_close_tab.clone();
                                let id = tab_id.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.stop_propagation();
                                    on_close_tab.emit(id.clone());
                                })
                            };
                            Some(html! {
                                <span class={classes!("tab", is_active.then_some("active"))} onclick={select}>
                                    { file.name() }
                                    <button class="tab-close" onclick={close}>{ "✕" }</button>
                                </span>
                            })
                        }) }
                    </div>
                    <button class="run-btn" onclick={on_run}>{ "▶ Run" }</button>
                </div>
                if let Some(file) = active_file {
                    <textarea
                        key={file.id().to_string()}
                        class="editor"
                        value={file.content().unwrap_or_default().to_string()}
                        oninput={on_editor_input}
                    />
                    if let Some(marker) = &*marker {
                        <div class="editor-marker">
                            { format!("Line {}: {}", marker.line, marker.message) }
                        </div>
                    }
                } else {
                    <div class="editor-empty">{ "No file selected" }</div>
                }
                <div class="output-panel">
                    if output.is_empty() {
                        <p class="output-placeholder">{ "Output will appear here..." }</p>
                    } else {
                        { for output.iter().map(|line| html! { <p>{ line }</p> }) }
                    }
                </div>
            </main>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    yew::Renderer::<App>::new().render();
}
