mod normalization;
