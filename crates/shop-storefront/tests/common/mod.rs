//! Scripted in-memory storefront server for controller tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;

use shop_client::{ClientError, Result, StorefrontApi};
use shop_model::{
    CartRequest, CartResponse, DeactivationResponse, OptionGroup, OptionType, OptionValueId,
    OptionValueItem, ProductDetail, ProductId, ProductVariantData, ProductVariantId,
    SelectionSet, VariantAvailability,
};
use tokio::sync::oneshot;

/// Answers are registered per selection (keyed by the selected value ids)
/// and released by the test, so it controls completion order.
#[derive(Default)]
pub struct ScriptedApi {
    availability: Mutex<HashMap<Vec<u64>, oneshot::Receiver<Result<VariantAvailability>>>>,
    cart: Mutex<VecDeque<Result<CartResponse>>>,
    deactivate: Mutex<VecDeque<Result<DeactivationResponse>>>,
    pub selections: Mutex<Vec<SelectionSet>>,
    pub cart_requests: Mutex<Vec<CartRequest>>,
}

fn key(ids: &[u64]) -> Vec<u64> {
    let mut key = ids.to_vec();
    key.sort_unstable();
    key
}

impl ScriptedApi {
    /// Hold the answer for a selection until the returned sender fires.
    pub fn gate_availability(&self, ids: &[u64]) -> oneshot::Sender<Result<VariantAvailability>> {
        let (tx, rx) = oneshot::channel();
        self.availability.lock().unwrap().insert(key(ids), rx);
        tx
    }

    /// Answer a selection immediately.
    pub fn reply_availability(&self, ids: &[u64], result: Result<VariantAvailability>) {
        let tx = self.gate_availability(ids);
        let _ = tx.send(result);
    }

    pub fn reply_cart(&self, result: Result<CartResponse>) {
        self.cart.lock().unwrap().push_back(result);
    }

    pub fn reply_deactivate(&self, result: Result<DeactivationResponse>) {
        self.deactivate.lock().unwrap().push_back(result);
    }

    pub fn selections(&self) -> Vec<SelectionSet> {
        self.selections.lock().unwrap().clone()
    }

    pub fn cart_requests(&self) -> Vec<CartRequest> {
        self.cart_requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl StorefrontApi for ScriptedApi {
    async fn option_value_selection(
        &self,
        _product_id: ProductId,
        selection: &SelectionSet,
    ) -> Result<VariantAvailability> {
        self.selections.lock().unwrap().push(selection.clone());
        let ids: Vec<u64> = selection
            .selected_value_ids()
            .into_iter()
            .map(|id| id.get())
            .collect();
        let reply = self.availability.lock().unwrap().remove(&key(&ids));
        match reply {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ClientError::Network("reply dropped".to_string()))),
            None => Err(ClientError::Network(format!("unscripted selection {ids:?}"))),
        }
    }

    async fn cart_action(&self, request: &CartRequest) -> Result<CartResponse> {
        self.cart_requests.lock().unwrap().push(request.clone());
        let reply = self.cart.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Err(ClientError::Network("unscripted cart action".to_string())))
    }

    async fn deactivate_account(&self) -> Result<DeactivationResponse> {
        let reply = self.deactivate.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Err(ClientError::Network("unscripted deactivation".to_string())))
    }
}

fn item(id: u64, name: &str) -> OptionValueItem {
    OptionValueItem {
        id: OptionValueId(id),
        name: name.to_string(),
        has_images: true,
    }
}

/// A shirt: Color@0 {Red=1, Blue=2}, Size@1 {S=11, M=12}, Fit@2 {Slim=21}.
pub fn shirt() -> ProductDetail {
    ProductDetail {
        product_id: ProductId(7),
        options: vec![
            OptionGroup {
                option_type: OptionType::new("Color", 0),
                values: vec![item(1, "Red"), item(2, "Blue")],
            },
            OptionGroup {
                option_type: OptionType::new("Size", 1),
                values: vec![item(11, "S"), item(12, "M")],
            },
            OptionGroup {
                option_type: OptionType::new("Fit", 2),
                values: vec![item(21, "Slim")],
            },
        ],
        single_variant: None,
    }
}

/// A product without option types.
pub fn mug(stock: u32) -> ProductDetail {
    ProductDetail {
        product_id: ProductId(8),
        options: vec![],
        single_variant: Some(ProductVariantData {
            product_variant_id: ProductVariantId(80),
            perceived_stock: stock,
        }),
    }
}

pub fn availability(variants: &[(u64, u32)], available: &[u64]) -> VariantAvailability {
    VariantAvailability {
        product_variants_data: variants
            .iter()
            .map(|&(id, perceived_stock)| ProductVariantData {
                product_variant_id: ProductVariantId(id),
                perceived_stock,
            })
            .collect(),
        available_option_values_data: available
            .iter()
            .map(|&id| (OptionValueId(id), format!("value {id}")))
            .collect::<BTreeMap<_, _>>(),
    }
}
