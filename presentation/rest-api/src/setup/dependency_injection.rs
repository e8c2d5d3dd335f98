use std::sync::Arc;

use logger::TracingLogger;
use persistence::db::JsonDatabase;
use persistence::order::repository::OrderRepositoryJson;
use persistence::product::repository::ProductRepositoryJson;

use stripe::client::StripeClient;
use stripe::payment_gateway::PaymentGatewayStripe;

use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::payment::create_intent::CreatePaymentIntentUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::stripe_config::StripeConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::HealthApi,
    pub product_api: crate::api::product::routes::ProductApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub payment_api: crate::api::payment::routes::PaymentApi,
}

impl DependencyContainer {
    pub async fn new(db: Arc<JsonDatabase>, stripe_config: &StripeConfig) -> anyhow::Result<Self> {
        let product_logger = Arc::new(TracingLogger::new("products"));
        let order_logger = Arc::new(TracingLogger::new("orders"));
        let payment_logger = Arc::new(TracingLogger::new("payments"));
        let health_api = crate::api::health::routes::HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryJson::new(db.clone()));
        let order_repository = Arc::new(OrderRepositoryJson::new(db));

        let stripe_client = StripeClient::new(stripe_config.secret_key.clone())
            .with_currency(stripe_config.currency.clone())
            .with_base_url(stripe_config.api_base.clone());
        if !stripe_client.is_configured() {
            tracing::warn!("STRIPE_SECRET_KEY not set, payment intents are disabled");
        }
        let payment_gateway = Arc::new(PaymentGatewayStripe::new(stripe_client));

        // Product use cases
        let create_product_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let update_product_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: product_logger.clone(),
        });
        let delete_product_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository,
            logger: product_logger,
        });

        // Order use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: order_logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: order_logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository,
            logger: order_logger,
        });

        // Payment use cases
        let create_payment_intent_use_case = Arc::new(CreatePaymentIntentUseCaseImpl {
            gateway: payment_gateway,
            logger: payment_logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_product_use_case,
            get_all_products_use_case,
            get_product_by_id_use_case,
            update_product_use_case,
            delete_product_use_case,
        );

        let order_api = crate::api::order::routes::OrderApi::new(
            create_order_use_case,
            get_all_orders_use_case,
            get_order_by_id_use_case,
        );

        let payment_api =
            crate::api::payment::routes::PaymentApi::new(create_payment_intent_use_case);

        Ok(Self {
            health_api,
            product_api,
            order_api,
            payment_api,
        })
    }
}
