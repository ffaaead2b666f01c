//! Shared shop-domain types for unit tests.

use modelmap_types::{Primitive, Type};

pub(crate) fn customer() -> Type {
	Type::record("shop.Customer")
		.property("name", &Type::string())
		.property("email", &Type::string())
		.build()
}

pub(crate) fn customer_dto() -> Type {
	Type::record("shop.CustomerDto")
		.property("name", &Type::string())
		.property("email", &Type::string())
		.build()
}

/// Customer view with a property no customer has.
pub(crate) fn customer_card() -> Type {
	Type::record("shop.CustomerCard")
		.property("name", &Type::string())
		.property("loyaltyTier", &Type::string())
		.build()
}

pub(crate) fn order() -> Type {
	Type::record("shop.Order")
		.property("id", &Type::primitive(Primitive::I64))
		.property("customer", &customer())
		.property("total", &Type::primitive(Primitive::F64))
		.build()
}

/// Fully matchable from [`order`]: boxing, stringification and a nested record.
pub(crate) fn order_dto() -> Type {
	Type::record("shop.OrderDto")
		.property("id", &Type::boxed(Primitive::I64))
		.property("customer", &customer_dto())
		.property("total", &Type::string())
		.build()
}

/// Only partially matchable from [`order`]: `dueDate` has no source.
pub(crate) fn invoice_dto() -> Type {
	Type::record("shop.InvoiceDto")
		.property("id", &Type::primitive(Primitive::I64))
		.property("dueDate", &Type::scalar("time.Date"))
		.build()
}
