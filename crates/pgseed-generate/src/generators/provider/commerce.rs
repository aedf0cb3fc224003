use fake::faker::lorem::en::Sentence;

use crate::generators::faker_rs::{decimal, pick_str, text};
use crate::generators::{FnGenerator, GeneratorRegistry, PoolGenerator};
use crate::model::GeneratedValue;

const ADJECTIVES: &[&str] = &[
    "Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
    "Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed",
    "Refined", "Unbranded", "Tasty",
];

const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
    "Fresh", "Frozen", "Bronze", "Marble",
];

const PRODUCTS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
    "Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
    "Pizza", "Salad", "Sausages", "Chips",
];

const DEPARTMENTS: &[&str] = &[
    "Books", "Movies", "Music", "Games", "Electronics", "Computers", "Home", "Garden", "Tools",
    "Grocery", "Health", "Beauty", "Toys", "Kids", "Baby", "Clothing", "Shoes", "Jewelery",
    "Sports", "Outdoors", "Automotive", "Industrial",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_builtin(FnGenerator::new(
        "commerce.productName",
        "Commerce - Product Name",
        |rng| {
            let adjective = pick_str(ADJECTIVES, rng);
            let material = pick_str(MATERIALS, rng);
            let product = pick_str(PRODUCTS, rng);
            GeneratedValue::Text(format!("{adjective} {material} {product}"))
        },
    ));
    registry.register_builtin(FnGenerator::new(
        "commerce.productDescription",
        "Commerce - Product Description",
        |rng| text(Sentence(8..16), rng),
    ));
    registry.register_builtin(FnGenerator::new(
        "commerce.price",
        "Commerce - Price",
        |rng| decimal(1.0, 1000.0, 2, rng),
    ));
    registry.register_builtin(PoolGenerator::new(
        "commerce.department",
        "Commerce - Department",
        DEPARTMENTS,
    ));
    registry.register_builtin(PoolGenerator::new(
        "commerce.productMaterial",
        "Commerce - Product Material",
        MATERIALS,
    ));
    registry.register_builtin(PoolGenerator::new(
        "commerce.productAdjective",
        "Commerce - Product Adjective",
        ADJECTIVES,
    ));
}
