use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub tabs: Vec<TabItem>,
    pub active: &'static str,
    pub on_change: Callback<&'static str>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <nav class="tab-bar">
            <div class="tab-bar-row">
                {for props.tabs.iter().map(|tab| {
                    let key = tab.key;
                    let on_change = props.on_change.clone();
                    let class = classes!("tab", (props.active == key).then_some("tab-active"));
                    html! {
                        <button
                            type="button"
                            key={key}
                            {class}
                            onclick={Callback::from(move |_: MouseEvent| on_change.emit(key))}
                        >
                            <span class="tab-icon">{tab.icon}</span>
                            <span>{tab.label}</span>
                        </button>
                    }
                })}
            </div>
        </nav>
    }
}
