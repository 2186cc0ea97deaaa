use shared::{visible_items, AlbumItem, ListKey};
use yew::prelude::*;

use super::empty::Empty;
use crate::hooks::use_fetch::use_list;

#[derive(Properties, PartialEq)]
pub struct AlbumGridViewProps {
    pub items: Option<Vec<AlbumItem>>,
    #[prop_or_default]
    pub loading: bool,
}

/// One cell per returned item; no padding to the fetch limit
#[function_component(AlbumGridView)]
pub fn album_grid_view(props: &AlbumGridViewProps) -> Html {
    html! {
        <div class="album" aria-busy={props.loading.then_some("true")}>
            {match visible_items(props.items.as_ref()) {
                Some(items) => html! {
                    <div class="album-grid">
                        {for items.iter().enumerate().map(|(index, item)| html! {
                            <div class="album-cell">
                                <img
                                    src={item.image_src(index)}
                                    alt={item.caption.clone().unwrap_or_default()}
                                />
                            </div>
                        })}
                    </div>
                },
                None => html! { <Empty title="No photos yet" /> },
            }}
        </div>
    }
}

#[function_component(AlbumGrid)]
pub fn album_grid() -> Html {
    let album = use_list::<AlbumItem>(ListKey::Album);

    html! {
        <AlbumGridView items={album.data.clone()} loading={album.loading} />
    }
}
