// Criterion benchmarks for Restaurant Directory

use async_trait::async_trait;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use restaurant_directory::controller::{ControllerSettings, ViewController};
use restaurant_directory::core::{bounds_of, filter_restaurants};
use restaurant_directory::map::{MarkerLayer, TileLayer};
use restaurant_directory::models::{FilterSelection, LatLng, Restaurant};
use restaurant_directory::services::{DataProvider, ProviderError};
use restaurant_directory::view::{render_restaurant_item, ImageSettings, Node};
use std::sync::Arc;

const NEIGHBORHOODS: &[&str] = &["Manhattan", "Brooklyn", "Queens"];
const CUISINES: &[&str] = &["Asian", "Pizza", "American", "Mexican"];

fn create_restaurant(id: usize) -> Restaurant {
    Restaurant {
        id: id as u32 + 1,
        name: format!("Restaurant {}", id),
        neighborhood: NEIGHBORHOODS[id % NEIGHBORHOODS.len()].to_string(),
        photograph: Some(format!("{}.jpg", id + 1)),
        address: format!("{} Broadway, New York, NY", id),
        latlng: LatLng::new(40.70 + (id as f64 * 0.0007) % 0.1, -74.0 + (id as f64 * 0.0011) % 0.1),
        cuisine_type: CUISINES[id % CUISINES.len()].to_string(),
        operating_hours: vec![],
        reviews: vec![],
    }
}

struct InMemoryProvider {
    restaurants: Vec<Restaurant>,
}

#[async_trait]
impl DataProvider for InMemoryProvider {
    async fn fetch_restaurants(&self) -> Result<Vec<Restaurant>, ProviderError> {
        Ok(self.restaurants.clone())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

fn tiles() -> TileLayer {
    TileLayer {
        url_template: "https://tiles.test/{z}/{x}/{y}.png".to_string(),
        attribution: String::new(),
        max_zoom: 18,
        id: "streets".to_string(),
        access_token: String::new(),
    }
}

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    let selection = FilterSelection::new("Pizza", "Brooklyn");

    for count in [10, 100, 1000].iter() {
        let restaurants: Vec<Restaurant> = (0..*count).map(create_restaurant).collect();

        group.bench_with_input(BenchmarkId::new("filter_restaurants", count), count, |b, _| {
            b.iter(|| filter_restaurants(black_box(&restaurants), black_box(&selection)));
        });
    }

    group.finish();
}

fn bench_render_item(c: &mut Criterion) {
    let restaurant = create_restaurant(3);
    let images = ImageSettings::default();

    c.bench_function("render_restaurant_item_html", |b| {
        b.iter(|| Node::from(render_restaurant_item(black_box(&restaurant), &images)).to_html());
    });
}

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");

    for count in [10, 100, 500].iter() {
        let restaurants: Vec<Restaurant> = (0..*count).map(create_restaurant).collect();
        let provider = Arc::new(InMemoryProvider {
            restaurants: restaurants.clone(),
        });

        let mut controller: ViewController<InMemoryProvider, MarkerLayer> =
            ViewController::new(provider, ControllerSettings::default());
        tokio_test::block_on(async {
            controller.initialize_filters().await;
            controller.initialize_map(MarkerLayer::new(tiles())).await;
        });

        group.bench_with_input(BenchmarkId::new("complete_refresh", count), count, |b, _| {
            b.iter(|| {
                let ticket = controller.begin_refresh();
                controller.complete_refresh(ticket, Ok(black_box(restaurants.clone())))
            });
        });
    }

    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let coords: Vec<LatLng> = (0..1000).map(|i| create_restaurant(i).latlng).collect();

    c.bench_function("marker_bounds_1000", |b| {
        b.iter(|| bounds_of(black_box(coords.iter().copied())));
    });
}

criterion_group!(benches, bench_filtering, bench_render_item, bench_refresh, bench_bounds);

criterion_main!(benches);
