use common::FileNode;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExplorerProps {
    pub tree: Vec<FileNode>,
    pub selected_folder_id: Option<String>,
    pub on_select: Callback<String>,
    pub on_add_file: Callback<MouseEvent>,
    pub on_add_folder: Callback<MouseEvent>,
    pub on_rename: Callback<String>,
    pub on_delete: Callback<String>,
}

#[function_component(FileExplorer)]
pub fn file_explorer(props: &ExplorerProps) -> Html {
    html! {
        <div class="file-explorer">
            <div class="explorer-header">
                <span class="explorer-title">{ "SNIP" }</span>
                <button onclick={props.on_add_file.clone()} title="New File">{ "+f" }</button>
                <button onclick={props.on_add_folder.clone()} title="New Folder">{ "+d" }</button>
            </div>
            <ul class="file-tree">
                { for props.tree.iter().map(|node| html! {
                    <ExplorerNode
                        node={node.clone()}
                        selected_folder_id={props.selected_folder_id.clone()}
                        on_select={props.on_select.clone()}
                        on_rename={props.on_rename.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                }) }
            </ul>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct ExplorerNodeProps {
    node: FileNode,
    selected_folder_id: Option<String>,
    on_select: Callback<String>,
    on_rename: Callback<String>,
    on_delete: Callback<String>,
}

#[function_component(ExplorerNode)]
fn explorer_node(props: &ExplorerNodeProps) -> Html {
    let node = &props.node;
    // Folders start collapsed
    let is_expanded = use_state(|| false);

    let on_click = {
        let on_select = props.on_select.clone();
        let id = node.id().to_string();
        let is_expanded = is_expanded.clone();
        let is_folder = node.is_folder();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if is_folder {
                is_expanded.set(!*is_expanded);
            }
            on_select.emit(id.clone());
        })
    };

    let on_rename = {
        let on_rename = props.on_rename.clone();
        let id = node.id().to_string();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_rename.emit(id.clone());
        })
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = node.id().to_string();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_delete.emit(id.clone());
        })
    };

    let is_selected = props.selected_folder_id.as_deref() == Some(node.id());

    if let FileNode::Folder { children, .. } = node {
        let icon = if *is_expanded { "▼" } else { "▶" };
        html! {
            <li>
                <div class={classes!("tree-row", is_selected.then_some("selected"))} onclick={on_click}>
                    <span class="tree-toggle">{ icon }</span>
                    <span class="folder-label folder">{ node.name() }</span>
                    <button class="node-action" onclick={on_rename}>{ "✎" }</button>
                    <button class="node-action" onclick={on_delete}>{ "✕" }</button>
                </div>
                if *is_expanded {
                    <ul>
                        { for children.iter().map(|child| html! {
                            <ExplorerNode
                                node={child.clone()}
                                selected_folder_id={props.selected_folder_id.clone()}
                                on_select={props.on_select.clone()}
                                on_rename={props.on_rename.clone()}
                                on_delete={props.on_delete.clone()}
                            />
                        }) }
                    </ul>
                }
            </li>
        }
    } else {
        html! {
            <li>
                <div class="tree-row" onclick={on_click}>
                    <span class="file-label">{ node.name() }</span>
                    <button class="node-action" onclick={on_rename}>{ "✎" }</button>
                    <button class="node-action" onclick={on_delete}>{ "✕" }</button>
                </div>
            </li>
        }
    }
}
