use crate::store_types::Product;

/// The fixed product list the storefront launches with.
pub fn seed_products() -> Vec<Product> {
    [
        (1, "Classic Tee", 29.99, "Tops", "Comfortable cotton t-shirt", 50),
        (2, "Premium Hoodie", 59.99, "Outerwear", "Warm and stylish hoodie", 30),
        (3, "Designer Jeans", 79.99, "Bottoms", "Slim-fit designer jeans", 25),
        (4, "Summer Dress", 49.99, "Dresses", "Lightweight summer dress", 20),
        (5, "Sports Cap", 24.99, "Accessories", "Adjustable sports cap", 40),
        (6, "Comfy Sweatpants", 39.99, "Bottoms", "Comfortable sweatpants", 35),
    ]
    .into_iter()
    .map(|(id, name, price, category, description, stock)| Product {
        id,
        name: name.to_string(),
        price: price.into(),
        category: category.to_string(),
        description: description.to_string(),
        stock,
    })
    .collect()
}
