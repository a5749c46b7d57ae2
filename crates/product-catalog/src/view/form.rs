//! The "add product" form.

use tracing::{info, instrument};

use super::ids::ProductIdGenerator;
use crate::clients::CatalogClient;
use crate::error::{CatalogError, FormError};
use crate::model::{ImageSource, NewProduct, Product};
use crate::query::{reformat_currency_input, PriceInput};

/// Text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Category,
    Price,
    Description,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nome",
            FormField::Category => "Categoria",
            FormField::Price => "Preço",
            FormField::Description => "Descrição",
        }
    }
}

/// Form state. Every text field is required; the price field holds currency text
/// reformatted as the user types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    name: String,
    category: String,
    price: String,
    /// Last text typed into the price field, before reformatting.
    price_typed: String,
    description: String,
    image: ImageSource,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: FormField, value: &str) {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Category => self.category = value.to_string(),
            FormField::Price => {
                self.price = reformat_currency_input(value);
                self.price_typed = value.to_string();
            }
            FormField::Description => self.description = value.to_string(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Category => &self.category,
            FormField::Price => &self.price,
            FormField::Description => &self.description,
        }
    }

    pub fn set_image(&mut self, image: ImageSource) {
        self.image = image;
    }

    /// Uses a pasted URL as the image. Blank input keeps the current image.
    pub fn set_image_url(&mut self, url: &str) {
        let url = url.trim();
        if !url.is_empty() {
            self.image = ImageSource::Url(url.to_string());
        }
    }

    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    /// The URL to preview, only when the image is a pasted URL.
    pub fn preview_url(&self) -> Option<&str> {
        match &self.image {
            ImageSource::Url(url) => Some(url),
            ImageSource::Asset(_) => None,
        }
    }

    /// Checks required fields and parses the price. Text fields come back trimmed.
    pub fn validate(&self) -> Result<NewProduct, FormError> {
        for field in [FormField::Name, FormField::Category] {
            if self.get(field).trim().is_empty() {
                return Err(FormError::MissingField(field.label()));
            }
        }
        let price = match PriceInput::classify(&self.price_typed) {
            PriceInput::Amount(price) => price,
            PriceInput::Unset => return Err(FormError::MissingField(FormField::Price.label())),
            PriceInput::Unparseable => {
                return Err(FormError::InvalidPrice(self.price_typed.clone()))
            }
        };
        if self.description.trim().is_empty() {
            return Err(FormError::MissingField(FormField::Description.label()));
        }

        Ok(NewProduct {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price,
            description: self.description.trim().to_string(),
            image: self.image.clone(),
        })
    }

    /// Validates, assigns a fresh id, appends to the store, and clears the form.
    ///
    /// On any error the form keeps its contents so the user can correct them.
    #[instrument(skip_all)]
    pub async fn submit(
        &mut self,
        client: &CatalogClient,
        ids: &ProductIdGenerator,
    ) -> Result<Product, CatalogError> {
        let draft = self.validate()?;
        let id = ids.next(client.max_id().await?);
        let product = draft.into_product(id);

        client.add_product(product.clone()).await?;
        info!(id = %product.id, name = %product.name, "Product added");

        self.reset();
        Ok(product)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::seed_products;
    use crate::model::{BundledImage, ProductId};
    use product_store::mock::{revision, MockStore};
    use product_store::{Change, StoreError};

    fn filled() -> ProductForm {
        let mut form = ProductForm::new();
        form.set(FormField::Name, "Apple Watch");
        form.set(FormField::Category, "Relógios");
        form.set(FormField::Price, "300000");
        form.set(FormField::Description, "Série 9, GPS.");
        form
    }

    fn frozen_clock() -> u64 {
        2
    }

    #[test]
    fn test_price_field_is_reformatted() {
        let form = filled();
        assert_eq!(form.get(FormField::Price), "R$ 3.000,00");
        assert_eq!(form.validate().unwrap().price, 3000.0);
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.set(FormField::Name, "   ");
        assert_eq!(form.validate(), Err(FormError::MissingField("Nome")));

        let mut form = filled();
        form.set(FormField::Price, "");
        assert_eq!(form.validate(), Err(FormError::MissingField("Preço")));

        let mut form = filled();
        form.set(FormField::Price, "abc");
        assert_eq!(form.get(FormField::Price), "");
        assert_eq!(form.validate(), Err(FormError::InvalidPrice("abc".into())));

        let mut form = filled();
        form.set(FormField::Description, "");
        assert_eq!(form.validate(), Err(FormError::MissingField("Descrição")));
    }

    #[test]
    fn test_every_text_field_is_trimmed() {
        let mut form = ProductForm::new();
        form.set(FormField::Name, "  Apple Watch ");
        form.set(FormField::Category, " Relógios");
        form.set(FormField::Price, "300000");
        form.set(FormField::Description, "Série 9.  \n");

        let draft = form.validate().unwrap();
        assert_eq!(draft.name, "Apple Watch");
        assert_eq!(draft.category, "Relógios");
        assert_eq!(draft.description, "Série 9.");
    }

    #[test]
    fn test_default_image_and_url_preview() {
        let mut form = filled();
        assert_eq!(form.image(), &ImageSource::Asset(BundledImage::Notebook));
        assert_eq!(form.preview_url(), None);

        form.set_image_url("  ");
        assert_eq!(form.image(), &ImageSource::Asset(BundledImage::Notebook));

        form.set_image_url("https://img.example.com/watch.png");
        assert_eq!(form.preview_url(), Some("https://img.example.com/watch.png"));

        form.set_image(BundledImage::Apple.into());
        assert_eq!(form.preview_url(), None);
    }

    #[tokio::test]
    async fn test_submit_appends_and_resets() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_snapshot().return_ok(seed_products());
        mock.expect_append()
            .return_ok(revision(2, 4, Change::Appended));
        let client = CatalogClient::new(mock.client());
        let ids = ProductIdGenerator::with_clock(frozen_clock);

        let mut form = filled();
        let product = form.submit(&client, &ids).await.unwrap();

        // clock is behind the seeded ids, so the id goes above them
        assert_eq!(product.id, ProductId(4));
        assert_eq!(product.name, "Apple Watch");
        assert_eq!(mock.received(), vec![product]);
        assert_eq!(form, ProductForm::new());
        mock.verify();
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_store() {
        let mock = MockStore::<Product>::new();
        let client = CatalogClient::new(mock.client());
        let ids = ProductIdGenerator::new();

        let mut form = filled();
        form.set(FormField::Category, "");
        let err = form.submit(&client, &ids).await.unwrap_err();

        assert_eq!(err, CatalogError::Form(FormError::MissingField("Categoria")));
        assert_eq!(form.get(FormField::Name), "Apple Watch");
        assert!(mock.received().is_empty());
    }

    #[tokio::test]
    async fn test_store_failure_keeps_form_contents() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_snapshot().return_ok(vec![]);
        mock.expect_append().return_err(StoreError::ActorClosed);
        let client = CatalogClient::new(mock.client());

        let mut form = filled();
        let err = form
            .submit(&client, &ProductIdGenerator::new())
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::Store(StoreError::ActorClosed));
        assert_eq!(form, filled());
    }
}
