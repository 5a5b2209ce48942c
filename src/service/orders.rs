//! Order placement: one transaction from cart to billing log.
//!
//! Sequence: snapshot unit prices, insert the order, insert its items,
//! decrement stock per item, append the bill. Any failure rolls the whole
//! placement back. The stock decrement is guarded (`stock >= quantity` in
//! the WHERE clause), so competing placements cannot oversell: the loser
//! sees zero rows affected and fails with `InsufficientStock`.

use crate::error::StoreError;
use crate::model::{Bill, Client, Order, OrderItem, Product};
use crate::service::validation;
use crate::service::CrudService;
use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

/// One cart line: what to order, not yet priced. The unit price is
/// snapshotted from the product inside the placement transaction.
#[derive(Clone, Copy, Debug)]
pub struct CartLine {
    pub product_id: i64,
    pub quantity: i64,
}

/// Everything written by a successful placement.
#[derive(Clone, Debug)]
pub struct PlacedOrder {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub bill: Bill,
}

#[derive(Clone)]
pub struct OrderService {
    pool: SqlitePool,
}

impl OrderService {
    pub fn new(pool: SqlitePool) -> Self {
        OrderService { pool }
    }

    /// Place an order for `client_id` covering every cart line.
    ///
    /// Validates before touching the store, then runs the full sequence in a
    /// single transaction. `total_amount` is the sum of quantity x unit
    /// price over the lines at this moment.
    #[tracing::instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn place_order(
        &self,
        client_id: i64,
        lines: &[CartLine],
    ) -> Result<PlacedOrder, StoreError> {
        if lines.is_empty() {
            return Err(StoreError::Validation("cart is empty".into()));
        }
        for line in lines {
            if line.quantity <= 0 {
                return Err(StoreError::Validation(
                    "quantity must be greater than 0".into(),
                ));
            }
        }

        let mut tx = self.pool.begin().await?;

        let client = CrudService::find_by_id_on::<Client>(&mut *tx, client_id)
            .await?
            .ok_or_else(|| StoreError::NotFound(format!("no client with id {}", client_id)))?;

        // Price the cart from current product rows; these snapshots become
        // the order items regardless of later product edits.
        let mut pending = Vec::with_capacity(lines.len());
        let mut total = 0.0;
        for line in lines {
            let product = CrudService::find_by_id_on::<Product>(&mut *tx, line.product_id)
                .await?
                .ok_or_else(|| {
                    StoreError::NotFound(format!("no product with id {}", line.product_id))
                })?;
            let item = OrderItem::new(0, product.id, line.quantity, product.price);
            validation::validate_order_item(&item)?;
            total += item.line_total();
            pending.push(item);
        }

        let order = Order::new(client_id, Utc::now(), total);
        validation::validate_order(&order)?;
        let order = CrudService::insert_on(&mut *tx, order).await?;

        let mut items = Vec::with_capacity(pending.len());
        for mut item in pending {
            item.order_id = order.id;
            let item = CrudService::insert_on(&mut *tx, item).await?;
            decrement_stock(&mut *tx, item.product_id, item.quantity).await?;
            items.push(item);
        }

        let bill = Bill::new(
            order.id,
            client.id,
            &client.name,
            order.order_date,
            order.total_amount,
        );
        let bill = CrudService::insert_on(&mut *tx, bill).await?;

        tx.commit().await?;
        tracing::info!(order_id = order.id, total = order.total_amount, "order placed");
        Ok(PlacedOrder { order, items, bill })
    }
}

/// Guarded read-modify-write: decrements only when enough stock remains.
async fn decrement_stock(
    conn: &mut SqliteConnection,
    product_id: i64,
    quantity: i64,
) -> Result<(), StoreError> {
    let sql = r#"UPDATE "product" SET "stock" = "stock" - ?1 WHERE "id" = ?2 AND "stock" >= ?1"#;
    tracing::debug!(sql = %sql, product_id, quantity, "update");
    let result = sqlx::query(sql)
        .bind(quantity)
        .bind(product_id)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() == 0 {
        return Err(StoreError::InsufficientStock {
            product_id,
            requested: quantity,
        });
    }
    Ok(())
}
