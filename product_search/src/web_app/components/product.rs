// web_app/components/product.rs - Product card
//
// Shows one selected product. All string work happens in
// web_app::format, so this file is markup only.

use leptos::prelude::*;

use crate::web_app::components::common::{LabeledValue, PriceDisplay};
use crate::web_app::format::CardText;
use crate::web_app::model::Product;

/// Product card: image, short title, category, brand and price
///
/// Renders nothing when `product` is `None`.
#[component]
pub fn ProductCard(
    /// The product to display
    #[prop(into)]
    product: Option<Product>,
) -> impl IntoView {
    product.map(|product| {
        let card = CardText::from_product(&product);

        view! {
            <div class="bg-white rounded-xl shadow-md hover:shadow-xl transition-shadow \
                        border border-gray-100 p-4 flex flex-col items-center gap-3">
                <img
                    src=card.image
                    alt=card.alt
                    class="h-40 w-full object-contain"
                    loading="lazy"
                />
                <h2 class="text-lg font-semibold text-gray-800 text-center">{card.title}</h2>
                <div class="flex justify-between gap-2 w-full">
                    <LabeledValue label="Category:" value=card.category />
                    <LabeledValue label="Brand:" value=card.brand />
                </div>
                <div class="flex items-center gap-2 self-start">
                    <span class="font-bold text-gray-700 text-sm">"Price:"</span>
                    <PriceDisplay price=card.price />
                </div>
            </div>
        }
    })
}
