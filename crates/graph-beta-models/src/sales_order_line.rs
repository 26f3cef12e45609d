use std::ops::{Deref, DerefMut};

use chrono::NaiveDate;
use graph_beta_abstractions::{
    assign_fields, AdditionalData, AdditionalDataHolder, FieldDeserializers, Parsable, ParseNode,
    SerializationError, SerializationWriter,
};
use uuid::Uuid;

use crate::Entity;

/// One line of a sales order in a Business Central company.
///
/// The `account` and `item` navigation properties are not bound; only their
/// ids are.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesOrderLine {
    base: Entity,
    account_id: Option<Uuid>,
    amount_excluding_tax: Option<f64>,
    amount_including_tax: Option<f64>,
    description: Option<String>,
    discount_amount: Option<f64>,
    discount_applied_before_tax: Option<bool>,
    discount_percent: Option<f64>,
    document_id: Option<Uuid>,
    invoice_discount_allocation: Option<f64>,
    invoiced_quantity: Option<f64>,
    invoice_quantity: Option<f64>,
    item_id: Option<Uuid>,
    line_type: Option<String>,
    net_amount: Option<f64>,
    net_amount_including_tax: Option<f64>,
    net_tax_amount: Option<f64>,
    quantity: Option<f64>,
    sequence: Option<i32>,
    shipment_date: Option<NaiveDate>,
    shipped_quantity: Option<f64>,
    ship_quantity: Option<f64>,
    tax_code: Option<String>,
    tax_percent: Option<f64>,
    total_tax_amount: Option<f64>,
    unit_of_measure_id: Option<Uuid>,
    unit_price: Option<f64>,
}

impl Deref for SalesOrderLine {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.base
    }
}

impl DerefMut for SalesOrderLine {
    fn deref_mut(&mut self) -> &mut Entity {
        &mut self.base
    }
}

impl SalesOrderLine {
    pub const ODATA_TYPE: &'static str = "#microsoft.graph.salesOrderLine";

    pub fn new() -> Self {
        let mut m = Self::default();
        m.set_odata_type(Some(Self::ODATA_TYPE.to_owned()));
        m
    }

    pub fn create_from_discriminator_value(_node: &dyn ParseNode) -> Result<Self, SerializationError> {
        Ok(Self::default())
    }

    pub fn account_id(&self) -> Option<Uuid> {
        self.account_id
    }

    pub fn set_account_id(&mut self, value: Option<Uuid>) {
        self.account_id = value;
    }

    pub fn amount_excluding_tax(&self) -> Option<f64> {
        self.amount_excluding_tax
    }

    pub fn set_amount_excluding_tax(&mut self, value: Option<f64>) {
        self.amount_excluding_tax = value;
    }

    pub fn amount_including_tax(&self) -> Option<f64> {
        self.amount_including_tax
    }

    pub fn set_amount_including_tax(&mut self, value: Option<f64>) {
        self.amount_including_tax = value;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: Option<String>) {
        self.description = value;
    }

    pub fn discount_amount(&self) -> Option<f64> {
        self.discount_amount
    }

    pub fn set_discount_amount(&mut self, value: Option<f64>) {
        self.discount_amount = value;
    }

    pub fn discount_applied_before_tax(&self) -> Option<bool> {
        self.discount_applied_before_tax
    }

    pub fn set_discount_applied_before_tax(&mut self, value: Option<bool>) {
        self.discount_applied_before_tax = value;
    }

    pub fn discount_percent(&self) -> Option<f64> {
        self.discount_percent
    }

    pub fn set_discount_percent(&mut self, value: Option<f64>) {
        self.discount_percent = value;
    }

    pub fn document_id(&self) -> Option<Uuid> {
        self.document_id
    }

    pub fn set_document_id(&mut self, value: Option<Uuid>) {
        self.document_id = value;
    }

    /// Share of the document-level invoice discount carried by this line.
    pub fn invoice_discount_allocation(&self) -> Option<f64> {
        self.invoice_discount_allocation
    }

    pub fn set_invoice_discount_allocation(&mut self, value: Option<f64>) {
        self.invoice_discount_allocation = value;
    }

    pub fn invoiced_quantity(&self) -> Option<f64> {
        self.invoiced_quantity
    }

    pub fn set_invoiced_quantity(&mut self, value: Option<f64>) {
        self.invoiced_quantity = value;
    }

    pub fn invoice_quantity(&self) -> Option<f64> {
        self.invoice_quantity
    }

    pub fn set_invoice_quantity(&mut self, value: Option<f64>) {
        self.invoice_quantity = value;
    }

    pub fn item_id(&self) -> Option<Uuid> {
        self.item_id
    }

    pub fn set_item_id(&mut self, value: Option<Uuid>) {
        self.item_id = value;
    }

    /// `Item`, `Account` or `Comment`.
    pub fn line_type(&self) -> Option<&str> {
        self.line_type.as_deref()
    }

    pub fn set_line_type(&mut self, value: Option<String>) {
        self.line_type = value;
    }

    pub fn net_amount(&self) -> Option<f64> {
        self.net_amount
    }

    pub fn set_net_amount(&mut self, value: Option<f64>) {
        self.net_amount = value;
    }

    pub fn net_amount_including_tax(&self) -> Option<f64> {
        self.net_amount_including_tax
    }

    pub fn set_net_amount_including_tax(&mut self, value: Option<f64>) {
        self.net_amount_including_tax = value;
    }

    pub fn net_tax_amount(&self) -> Option<f64> {
        self.net_tax_amount
    }

    pub fn set_net_tax_amount(&mut self, value: Option<f64>) {
        self.net_tax_amount = value;
    }

    pub fn quantity(&self) -> Option<f64> {
        self.quantity
    }

    pub fn set_quantity(&mut self, value: Option<f64>) {
        self.quantity = value;
    }

    /// Position of the line within its order.
    pub fn sequence(&self) -> Option<i32> {
        self.sequence
    }

    pub fn set_sequence(&mut self, value: Option<i32>) {
        self.sequence = value;
    }

    pub fn shipment_date(&self) -> Option<NaiveDate> {
        self.shipment_date
    }

    pub fn set_shipment_date(&mut self, value: Option<NaiveDate>) {
        self.shipment_date = value;
    }

    pub fn shipped_quantity(&self) -> Option<f64> {
        self.shipped_quantity
    }

    pub fn set_shipped_quantity(&mut self, value: Option<f64>) {
        self.shipped_quantity = value;
    }

    pub fn ship_quantity(&self) -> Option<f64> {
        self.ship_quantity
    }

    pub fn set_ship_quantity(&mut self, value: Option<f64>) {
        self.ship_quantity = value;
    }

    pub fn tax_code(&self) -> Option<&str> {
        self.tax_code.as_deref()
    }

    pub fn set_tax_code(&mut self, value: Option<String>) {
        self.tax_code = value;
    }

    pub fn tax_percent(&self) -> Option<f64> {
        self.tax_percent
    }

    pub fn set_tax_percent(&mut self, value: Option<f64>) {
        self.tax_percent = value;
    }

    pub fn total_tax_amount(&self) -> Option<f64> {
        self.total_tax_amount
    }

    pub fn set_total_tax_amount(&mut self, value: Option<f64>) {
        self.total_tax_amount = value;
    }

    pub fn unit_of_measure_id(&self) -> Option<Uuid> {
        self.unit_of_measure_id
    }

    pub fn set_unit_of_measure_id(&mut self, value: Option<Uuid>) {
        self.unit_of_measure_id = value;
    }

    pub fn unit_price(&self) -> Option<f64> {
        self.unit_price
    }

    pub fn set_unit_price(&mut self, value: Option<f64>) {
        self.unit_price = value;
    }

    pub fn field_deserializers() -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::inherit(Entity::field_deserializers(), |m: &mut Self| &mut m.base);
        res.insert("accountId", |m, n| {
            if let Some(v) = n.get_uuid_value()? {
                m.set_account_id(Some(v));
            }
            Ok(())
        });
        res.insert("amountExcludingTax", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_amount_excluding_tax(Some(v));
            }
            Ok(())
        });
        res.insert("amountIncludingTax", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_amount_including_tax(Some(v));
            }
            Ok(())
        });
        res.insert("description", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_description(Some(v));
            }
            Ok(())
        });
        res.insert("discountAmount", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_discount_amount(Some(v));
            }
            Ok(())
        });
        res.insert("discountAppliedBeforeTax", |m, n| {
            if let Some(v) = n.get_bool_value()? {
                m.set_discount_applied_before_tax(Some(v));
            }
            Ok(())
        });
        res.insert("discountPercent", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_discount_percent(Some(v));
            }
            Ok(())
        });
        res.insert("documentId", |m, n| {
            if let Some(v) = n.get_uuid_value()? {
                m.set_document_id(Some(v));
            }
            Ok(())
        });
        res.insert("invoiceDiscountAllocation", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_invoice_discount_allocation(Some(v));
            }
            Ok(())
        });
        res.insert("invoicedQuantity", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_invoiced_quantity(Some(v));
            }
            Ok(())
        });
        res.insert("invoiceQuantity", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_invoice_quantity(Some(v));
            }
            Ok(())
        });
        res.insert("itemId", |m, n| {
            if let Some(v) = n.get_uuid_value()? {
                m.set_item_id(Some(v));
            }
            Ok(())
        });
        res.insert("lineType", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_line_type(Some(v));
            }
            Ok(())
        });
        res.insert("netAmount", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_net_amount(Some(v));
            }
            Ok(())
        });
        res.insert("netAmountIncludingTax", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_net_amount_including_tax(Some(v));
            }
            Ok(())
        });
        res.insert("netTaxAmount", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_net_tax_amount(Some(v));
            }
            Ok(())
        });
        res.insert("quantity", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_quantity(Some(v));
            }
            Ok(())
        });
        res.insert("sequence", |m, n| {
            if let Some(v) = n.get_int32_value()? {
                m.set_sequence(Some(v));
            }
            Ok(())
        });
        res.insert("shipmentDate", |m, n| {
            if let Some(v) = n.get_date_only_value()? {
                m.set_shipment_date(Some(v));
            }
            Ok(())
        });
        res.insert("shippedQuantity", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_shipped_quantity(Some(v));
            }
            Ok(())
        });
        res.insert("shipQuantity", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_ship_quantity(Some(v));
            }
            Ok(())
        });
        res.insert("taxCode", |m, n| {
            if let Some(v) = n.get_string_value()? {
                m.set_tax_code(Some(v));
            }
            Ok(())
        });
        res.insert("taxPercent", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_tax_percent(Some(v));
            }
            Ok(())
        });
        res.insert("totalTaxAmount", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_total_tax_amount(Some(v));
            }
            Ok(())
        });
        res.insert("unitOfMeasureId", |m, n| {
            if let Some(v) = n.get_uuid_value()? {
                m.set_unit_of_measure_id(Some(v));
            }
            Ok(())
        });
        res.insert("unitPrice", |m, n| {
            if let Some(v) = n.get_float64_value()? {
                m.set_unit_price(Some(v));
            }
            Ok(())
        });
        res
    }
}

impl AdditionalDataHolder for SalesOrderLine {
    fn additional_data(&self) -> &AdditionalData {
        self.base.additional_data()
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        self.base.additional_data_mut()
    }
}

impl Parsable for SalesOrderLine {
    fn assign_field_values(&mut self, node: &dyn ParseNode) -> Result<(), SerializationError> {
        assign_fields(self, &Self::field_deserializers(), node)
    }

    fn serialize(&self, writer: &mut dyn SerializationWriter) -> Result<(), SerializationError> {
        self.base.serialize(writer)?;
        writer.write_uuid_value("accountId", self.account_id())?;
        writer.write_float64_value("amountExcludingTax", self.amount_excluding_tax())?;
        writer.write_float64_value("amountIncludingTax", self.amount_including_tax())?;
        writer.write_string_value("description", self.description())?;
        writer.write_float64_value("discountAmount", self.discount_amount())?;
        writer.write_bool_value("discountAppliedBeforeTax", self.discount_applied_before_tax())?;
        writer.write_float64_value("discountPercent", self.discount_percent())?;
        writer.write_uuid_value("documentId", self.document_id())?;
        writer.write_float64_value("invoiceDiscountAllocation", self.invoice_discount_allocation())?;
        writer.write_float64_value("invoicedQuantity", self.invoiced_quantity())?;
        writer.write_float64_value("invoiceQuantity", self.invoice_quantity())?;
        writer.write_uuid_value("itemId", self.item_id())?;
        writer.write_string_value("lineType", self.line_type())?;
        writer.write_float64_value("netAmount", self.net_amount())?;
        writer.write_float64_value("netAmountIncludingTax", self.net_amount_including_tax())?;
        writer.write_float64_value("netTaxAmount", self.net_tax_amount())?;
        writer.write_float64_value("quantity", self.quantity())?;
        writer.write_int32_value("sequence", self.sequence())?;
        writer.write_date_only_value("shipmentDate", self.shipment_date())?;
        writer.write_float64_value("shippedQuantity", self.shipped_quantity())?;
        writer.write_float64_value("shipQuantity", self.ship_quantity())?;
        writer.write_string_value("taxCode", self.tax_code())?;
        writer.write_float64_value("taxPercent", self.tax_percent())?;
        writer.write_float64_value("totalTaxAmount", self.total_tax_amount())?;
        writer.write_uuid_value("unitOfMeasureId", self.unit_of_measure_id())?;
        writer.write_float64_value("unitPrice", self.unit_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_beta_json::{deserialize_value, serialize_to_value};
    use serde_json::json;

    #[test]
    fn typed_values_round_trip() {
        let payload = json!({
            "id": "line-1",
            "accountId": "8b7d2a3e-0c4f-4d1a-9f7e-2a6b1c3d4e5f",
            "amountExcludingTax": 120.5,
            "discountAppliedBeforeTax": true,
            "quantity": 3.0,
            "sequence": 10000,
            "shipmentDate": "2024-02-29",
            "account": {"number": "10100"}
        });
        let line = deserialize_value(&payload, SalesOrderLine::create_from_discriminator_value).unwrap();

        assert_eq!(
            line.account_id(),
            Some(Uuid::parse_str("8b7d2a3e-0c4f-4d1a-9f7e-2a6b1c3d4e5f").unwrap())
        );
        assert_eq!(line.amount_excluding_tax(), Some(120.5));
        assert_eq!(line.sequence(), Some(10000));
        assert_eq!(line.shipment_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(line.additional_data()["account"], json!({"number": "10100"}));

        assert_eq!(serialize_to_value(&line).unwrap(), payload);
    }

    #[test]
    fn malformed_uuid_is_invalid_value() {
        let payload = json!({"itemId": "not-a-uuid"});
        let err = deserialize_value(&payload, SalesOrderLine::create_from_discriminator_value).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "uuid", .. }));
    }

    #[test]
    fn shipment_date_rejects_timestamps() {
        let payload = json!({"shipmentDate": "2024-02-29T00:00:00Z"});
        let err = deserialize_value(&payload, SalesOrderLine::create_from_discriminator_value).unwrap_err();
        assert!(matches!(err, SerializationError::InvalidValue { kind: "date", .. }));
    }
}
